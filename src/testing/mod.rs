mod recording_remote;

pub use recording_remote::{FailOn, RecordingRemote};
