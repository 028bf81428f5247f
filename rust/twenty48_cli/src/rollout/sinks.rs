// src/rollout/sinks.rs
#![forbid(unsafe_code)]

/// One periodic row emitted by the runner.
///
/// Transport struct: runner/stats compute fields, sinks only format/emit.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub step: u64,
    pub steps_total: u64,

    pub sps: f64,

    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub score_per_step: f64,
    pub reward_per_step: f64,

    /// Share of steps whose move left the board unchanged.
    pub invalid_rate: f64,

    /// Largest tile seen on any board so far.
    pub best_tile: u32,
    /// Mean of the final max tile over finished episodes.
    pub avg_final_tile: f64,
    pub wins: u64,
}

/// Sink interface for periodic reporting.
pub trait RolloutSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>);
}

/// Default sink: does nothing.
#[derive(Default)]
pub struct NoopSink;

impl RolloutSink for NoopSink {
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&indicatif::ProgressBar>) {}
}

/// Column spec shared by the header and every row: (title, width).
const COLUMNS: [(&str, usize); 11] = [
    ("step/total", 21),
    ("sps", 9),
    ("eps", 5),
    ("avg_ep", 9),
    ("max_ep", 7),
    ("score/st", 10),
    ("rew/st", 9),
    ("invalid", 8),
    ("best", 7),
    ("avgTile", 9),
    ("wins", 5),
];

/// Re-print the header after this many rows so it stays on screen.
const HEADER_EVERY: u64 = 20;

/// Human-readable periodic table. Cadence in steps is the runner's job.
#[derive(Default)]
pub struct TableSink {
    rows_printed: u64,
}

impl TableSink {
    fn header() -> String {
        let cells: Vec<String> = COLUMNS.iter().map(|&(t, w)| format!("{t:>w$}")).collect();
        cells.join(" ")
    }

    fn row(r: &ReportRow) -> String {
        let cells = [
            format!("{}/{}", r.step, r.steps_total),
            format!("{:.1}", r.sps),
            r.episodes_finished.to_string(),
            format!("{:.1}", r.avg_ep_len),
            r.max_ep_len.to_string(),
            format!("{:.2}", r.score_per_step),
            format!("{:.4}", r.reward_per_step),
            format!("{:.3}", r.invalid_rate),
            r.best_tile.to_string(),
            format!("{:.1}", r.avg_final_tile),
            r.wins.to_string(),
        ];
        let cells: Vec<String> = cells
            .iter()
            .zip(COLUMNS)
            .map(|(c, (_, w))| format!("{c:>w$}"))
            .collect();
        cells.join(" ")
    }

    /// Lines to emit for `row`, header included when due.
    fn render(&mut self, row: &ReportRow) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if self.rows_printed % HEADER_EVERY == 0 {
            let header = Self::header();
            let sep = "-".repeat(header.len());
            lines.push(header);
            lines.push(sep);
        }
        lines.push(Self::row(row));
        self.rows_printed += 1;
        lines
    }
}

impl RolloutSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>) {
        for line in self.render(row) {
            match pb {
                Some(pb) => pb.println(line),
                None => println!("{line}"),
            }
        }
    }
}
