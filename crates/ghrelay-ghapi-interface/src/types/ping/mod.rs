mod ping_event;

pub use ping_event::GhPingEvent;
