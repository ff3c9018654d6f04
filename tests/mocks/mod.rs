pub mod fixture_source;
