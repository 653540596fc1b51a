pub struct Icons;

impl Icons {
    pub const BUILDING: &str = "🏢";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
}
