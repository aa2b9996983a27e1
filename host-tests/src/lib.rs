//! Host-based end-to-end tests for the POV spinner storage layer
//! These tests run on the development machine, not on the ESP32
