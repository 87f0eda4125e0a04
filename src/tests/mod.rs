// Test modules for TalkHub
// Each module exercises the public API of the corresponding source module

mod support;
