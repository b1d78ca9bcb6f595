pub mod see_chunk;
