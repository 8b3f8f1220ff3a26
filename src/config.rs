use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct PipelineParams {
    /// Last regular-season week requested from the stats source.
    #[arg(long, default_value_t = 18)]
    pub final_week: u32,

    // === VOLUME FLOORS ===
    #[arg(long, default_value_t = 10.0)]
    pub min_rb_opportunities: f64,
    #[arg(long, default_value_t = 20.0)]
    pub min_wr_snaps: f64,
    #[arg(long, default_value_t = 1.0)]
    pub min_defense_games: f64,

    /// A week counts as complete once this many distinct teams report data.
    #[arg(long, default_value_t = 30)]
    pub complete_week_team_threshold: usize,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            final_week: 18,
            min_rb_opportunities: 10.0,
            min_wr_snaps: 20.0,
            min_defense_games: 1.0,
            complete_week_team_threshold: 30,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SeatingParams {
    /// Case-insensitive substring identifying the reference seat's occupant.
    #[arg(long, default_value = "vinesh")]
    pub reference_name: String,
    #[arg(long, default_value_t = 800.0)]
    pub layout_width: f64,
    #[arg(long, default_value_t = 850.0)]
    pub layout_height: f64,
}

impl Default for SeatingParams {
    fn default() -> Self {
        Self {
            reference_name: "vinesh".to_string(),
            layout_width: 800.0,
            layout_height: 850.0,
        }
    }
}

impl SeatingParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.reference_name.trim().is_empty() {
            return Err("--reference-name must not be empty".to_string());
        }
        if !(self.layout_width > 0.0 && self.layout_height > 0.0) {
            return Err(format!(
                "layout dimensions must be positive (got {}x{})",
                self.layout_width, self.layout_height
            ));
        }
        Ok(())
    }
}
