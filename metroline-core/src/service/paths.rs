//! Path queries: resolve endpoints, build the graph, route, price

use log::debug;
use serde::Serialize;

use crate::fare::Fare;
use crate::model::Station;
use crate::routing::NetworkGraph;
use crate::service::store::{LineStore, StationStore};
use crate::topology::SectionChain;
use crate::{Error, StationId};

/// Answer to a path request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSummary {
    /// Stations visited, source to target, resolved with their names
    pub stations: Vec<Station>,
    pub total_distance: u32,
    pub fare: Fare,
}

pub struct PathService<'a, L, S> {
    lines: &'a L,
    stations: &'a S,
}

impl<'a, L: LineStore, S: StationStore> PathService<'a, L, S> {
    pub fn new(lines: &'a L, stations: &'a S) -> Self {
        Self { lines, stations }
    }

    /// Shortest route between two stations, priced for the rider.
    ///
    /// The network graph is rebuilt from a fresh store snapshot on every
    /// call; isolation against concurrent topology changes is the store's
    /// transaction boundary.
    ///
    /// # Errors
    ///
    /// Propagates endpoint resolution ([`Error::UnknownStation`]), routing
    /// ([`Error::IdenticalEndpoints`], [`Error::NoPathExists`]) and fare
    /// ([`Error::InvalidAge`]) failures, plus store errors.
    pub fn compute(
        &self,
        source: StationId,
        target: StationId,
        age: u32,
    ) -> Result<PathSummary, Error> {
        self.resolve(source)?;
        self.resolve(target)?;

        let loaded = self.lines.load_all()?;
        let mut network = Vec::with_capacity(loaded.len());
        for entry in loaded {
            let chain = SectionChain::from_unordered(entry.sections)?;
            network.push((entry.line, chain));
        }
        let graph = NetworkGraph::from_lines(network.iter().map(|(line, chain)| (line, chain)));

        let path = graph.shortest_path(source, target)?;
        let fare = Fare::from_trip(path.total_distance, graph.max_extra_fare_along(&path), age)?;
        debug!(
            "path {source} -> {target}: {} stations over {} lines, distance {}",
            path.stations.len(),
            path.lines.len(),
            path.total_distance
        );

        let stations = path
            .stations
            .iter()
            .map(|&id| self.resolve(id))
            .collect::<Result<_, _>>()?;
        Ok(PathSummary {
            stations,
            total_distance: path.total_distance,
            fare,
        })
    }

    fn resolve(&self, id: StationId) -> Result<Station, Error> {
        self.stations.load(id)?.ok_or(Error::UnknownStation(id))
    }
}
