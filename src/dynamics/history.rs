use super::state::State;

// ---------------------------------------------------------------------------
// Recorded samples
// ---------------------------------------------------------------------------

/// One entry of a body's history: the state computed at `time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64, // s
    pub state: State,
}

// ---------------------------------------------------------------------------
// Flat tabular view
// ---------------------------------------------------------------------------

/// Column labels of a [`StateTable`], in record field order.
/// The first column is the time index.
pub const COLUMNS: [&str; 10] = [
    "Time [sec]",
    "Position x [m]",
    "Position y [m]",
    "Position z [m]",
    "Velocity x [m/s]",
    "Velocity y [m/s]",
    "Velocity z [m/s]",
    "Acceleration x [m/s^2]",
    "Acceleration y [m/s^2]",
    "Acceleration z [m/s^2]",
];

/// Fixed-width row: time index plus nine labeled numeric fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRecord {
    pub time: f64,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub acceleration_z: f64,
}

impl StateRecord {
    /// Values in [`COLUMNS`] order.
    pub fn values(&self) -> [f64; 10] {
        [
            self.time,
            self.position_x,
            self.position_y,
            self.position_z,
            self.velocity_x,
            self.velocity_y,
            self.velocity_z,
            self.acceleration_x,
            self.acceleration_y,
            self.acceleration_z,
        ]
    }
}

impl From<&Sample> for StateRecord {
    fn from(sample: &Sample) -> Self {
        let p = sample.state.position();
        let v = sample.state.velocity();
        let a = sample.state.acceleration();
        StateRecord {
            time: sample.time,
            position_x: p.x(),
            position_y: p.y(),
            position_z: p.z(),
            velocity_x: v.x(),
            velocity_y: v.y(),
            velocity_z: v.z(),
            acceleration_x: a.x(),
            acceleration_y: a.y(),
            acceleration_z: a.z(),
        }
    }
}

/// Chronological table of a body's history, one row per recorded timestep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateTable {
    rows: Vec<StateRecord>,
}

impl StateTable {
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self { rows: samples.iter().map(StateRecord::from).collect() }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[StateRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Time index column.
    pub fn index(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.time).collect()
    }

    /// Row recorded at exactly `time`, if any.
    pub fn at(&self, time: f64) -> Option<&StateRecord> {
        self.rows.iter().find(|r| r.time == time)
    }

    /// All values of one labeled column, or `None` for an unknown label.
    pub fn column(&self, label: &str) -> Option<Vec<f64>> {
        let idx = COLUMNS.iter().position(|c| *c == label)?;
        Some(self.rows.iter().map(|r| r.values()[idx]).collect())
    }
}
