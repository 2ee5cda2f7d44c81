mod fake_microphone;

pub use fake_microphone::FakeMicrophone;
