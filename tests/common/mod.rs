pub mod external_server;
