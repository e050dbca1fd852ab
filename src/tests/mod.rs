mod common;
mod scenario;
