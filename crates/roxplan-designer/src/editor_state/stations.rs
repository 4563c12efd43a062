//! Station numbering and legend.

use super::EditorState;
use crate::model::Element;

impl EditorState {
    /// Numbers stations 1..n top-to-bottom, then left-to-right.
    ///
    /// Other elements are untouched. Returns the number of stations; with
    /// none, nothing is recorded and the plan stays as it was.
    pub fn auto_number_stations(&mut self) -> usize {
        let mut order: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_station())
            .map(|(i, _)| i)
            .collect();
        if order.is_empty() {
            return 0;
        }

        self.record_history();
        let elements = &self.elements;
        order.sort_by(|&a, &b| {
            let (a, b) = (&elements[a], &elements[b]);
            a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
        });
        for (n, index) in order.iter().enumerate() {
            self.elements[*index].station_number = Some(n as u32 + 1);
        }
        self.dirty = true;
        tracing::info!("Numbered {} station(s)", order.len());
        order.len()
    }

    /// Stations ordered by number; unnumbered stations follow in insertion
    /// order.
    pub fn station_legend(&self) -> Vec<&Element> {
        let mut stations: Vec<&Element> = self.elements.iter().filter(|e| e.is_station()).collect();
        stations.sort_by_key(|e| (e.station_number.is_none(), e.station_number));
        stations
    }
}
