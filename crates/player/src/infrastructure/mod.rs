pub mod http_client;
pub mod platform;

#[cfg(test)]
pub mod testing;
