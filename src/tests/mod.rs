// Tests module
// Integration scenarios for the relay operations and conservation properties

pub mod integration;
