mod file_storage;

pub use file_storage::FileAudioStorage;
