mod conversation;
mod render;
mod telemetry;
