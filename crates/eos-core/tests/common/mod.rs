pub mod sample_server;
