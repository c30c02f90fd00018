pub mod link_payload;
