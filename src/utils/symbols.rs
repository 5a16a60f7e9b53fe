pub mod arrow {
    pub const UP: &str = "↑";
    pub const DOWN: &str = "↓";
}
