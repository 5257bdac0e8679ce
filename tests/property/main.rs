// Property-based tests
// Random inputs against the palette invariants

mod palette_properties;
