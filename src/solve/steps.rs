use crate::matrix::{AugMatrix, Element};

// One labeled transformation of the working matrix. Immutable once
// recorded; insertion order is display order.
#[derive(Debug, Clone)]
pub struct StepRecord<T> {
    pub title: String,
    pub snapshot: AugMatrix<T>,
    pub note: Option<String>,
}

// Seam between the engine and whatever presents the trace.
pub trait StepSink<T> {
    fn record(&mut self, title: String, matrix: &AugMatrix<T>, note: Option<&str>);
}

#[derive(Debug, Default)]
pub struct StepRecorder<T> {
    steps: Vec<StepRecord<T>>,
}

impl<T: Element> StepRecorder<T> {
    pub fn new() -> Self {
        StepRecorder { steps: vec![] }
    }

    pub fn all(&self) -> &[StepRecord<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepRecord<T>> {
        self.steps
    }
}

impl<T: Element> StepSink<T> for StepRecorder<T> {
    // the snapshot is cloned at call time; the engine keeps mutating the
    // live matrix afterwards
    fn record(&mut self, title: String, matrix: &AugMatrix<T>, note: Option<&str>) {
        self.steps.push(StepRecord {
            title,
            snapshot: matrix.clone(),
            note: note.map(|n| n.to_string()),
        });
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
