//! Temperature classification into display states.
//!
//! Each temperature source has its own comfort bands; the result drives icon
//! and color selection. The bands live in one declarative table so adding a
//! sensor is a data change, not new branching.

/// Display state derived from a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StateKey {
    Low,
    Middle,
    High,
}

/// A temperature source with its own threshold bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempSource {
    Cpu,
    Nvme,
    Rp1,
}

/// Upper bounds (inclusive) for Low and Middle, per source.
/// Anything above the second bound is High.
const BANDS: &[(TempSource, [f64; 2])] = &[
    (TempSource::Cpu, [55.0, 70.0]),
    (TempSource::Nvme, [35.0, 50.0]),
    (TempSource::Rp1, [52.0, 60.0]),
];

impl TempSource {
    /// Classify a temperature into its display state.
    pub fn classify(&self, temp: f64) -> StateKey {
        for (source, [low_max, middle_max]) in BANDS {
            if source == self {
                return if temp <= *low_max {
                    StateKey::Low
                } else if temp <= *middle_max {
                    StateKey::Middle
                } else {
                    StateKey::High
                };
            }
        }
        // Sources without configured bands read as neutral
        StateKey::Middle
    }
}

/// Tracks the applied CPU-temperature state so the UI only reacts to actual
/// transitions. Re-polling the same temperature must not churn styling.
#[derive(Debug, Clone, Default)]
pub struct GradientState {
    current: Option<StateKey>,
}

impl GradientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest CPU temperature. Returns the new state only when it
    /// differs from the one already applied; None means nothing to do.
    pub fn update(&mut self, cpu_temp: f64) -> Option<StateKey> {
        let key = TempSource::Cpu.classify(cpu_temp);
        if self.current == Some(key) {
            return None;
        }
        self.current = Some(key);
        Some(key)
    }

    /// The state currently applied, if any snapshot carried a CPU temp yet.
    pub fn current(&self) -> Option<StateKey> {
        self.current
    }
}
