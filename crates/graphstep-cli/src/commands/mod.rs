pub mod analyze;
pub mod dijkstra;
pub mod floyd;
pub mod knapsack;
pub mod kruskal;
pub mod ops;
