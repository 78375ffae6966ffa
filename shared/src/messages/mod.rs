pub mod console;
pub mod entity_update;
pub mod notification;
pub mod notifications;
