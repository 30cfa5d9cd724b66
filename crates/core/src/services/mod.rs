pub mod size_stats;
