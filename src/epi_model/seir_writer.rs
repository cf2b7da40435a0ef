use{
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    },
};

/// Receives one `(step, S, E, I, R)` row per time step while a run is in
/// progress.
pub trait StepSink{
    fn record(&mut self, step: usize, s: u32, e: u32, i: u32, r: u32)
    -> std::io::Result<()>;
}

/// Sweep runs only care about the terminal totals.
pub struct DiscardSteps;

impl StepSink for DiscardSteps{
    fn record(&mut self, _step: usize, _s: u32, _e: u32, _i: u32, _r: u32)
    -> std::io::Result<()>
    {
        Ok(())
    }
}

/// Buffered csv writer for the per-step curves, one file per run. Rows are
/// flushed as they come so partial curves survive a crash.
pub struct SeirWriter{
    writer: BufWriter<File>,
}

impl SeirWriter{
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self>
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "time,s,e,i,r")?;
        Ok(Self{writer})
    }
}

impl StepSink for SeirWriter{
    fn record(&mut self, step: usize, s: u32, e: u32, i: u32, r: u32)
    -> std::io::Result<()>
    {
        writeln!(self.writer, "{},{},{},{},{}", step, s, e, i, r)?;
        self.writer.flush()
    }
}

#[cfg(test)]
pub(crate) struct CollectSteps{
    pub rows: Vec<(usize, u32, u32, u32, u32)>,
}

#[cfg(test)]
impl CollectSteps{
    pub fn new() -> Self{
        Self{rows: Vec::new()}
    }
}

#[cfg(test)]
impl StepSink for CollectSteps{
    fn record(&mut self, step: usize, s: u32, e: u32, i: u32, r: u32)
    -> std::io::Result<()>
    {
        self.rows.push((step, s, e, i, r));
        Ok(())
    }
}
