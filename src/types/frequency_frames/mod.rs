pub mod climatology_frame;
