pub mod http_telemetry;
