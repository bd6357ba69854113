mod common;
mod generator;
mod store;
