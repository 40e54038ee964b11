pub mod ground_track;
