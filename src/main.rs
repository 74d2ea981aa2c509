use anyhow::Context;
use gaussian_cookbook::config::ProcessKind;
use gaussian_cookbook::config::ProcessParams;
use gaussian_cookbook::generate_process;
use gaussian_cookbook::stochastic::HURST;
use gaussian_cookbook::stochastic::N;
use gaussian_cookbook::summarize;
use prettytable::row;
use prettytable::Table;

// Usage: gaussian-cookbook [steps] [hurst]
fn main() -> anyhow::Result<()> {
  let mut args = std::env::args().skip(1);
  let steps = match args.next() {
    Some(s) => s
      .parse::<usize>()
      .with_context(|| format!("steps must be a positive integer, got {s:?}"))?,
    None => N,
  };
  let hurst = match args.next() {
    Some(s) => s
      .parse::<f64>()
      .with_context(|| format!("hurst must be a number, got {s:?}"))?,
    None => HURST,
  };

  let mut table = Table::new();
  table.set_titles(row!["Process", "Steps", "Mean", "Variance", "Estimated H"]);

  for kind in ProcessKind::ALL {
    let params = ProcessParams::new(kind, hurst, steps);
    match generate_process(&params).and_then(|path| summarize(path.view())) {
      Ok(stats) => table.add_row(row![
        kind.label(),
        steps,
        format!("{:.3}", stats.mean),
        format!("{:.3}", stats.variance),
        format!("{:.3}", stats.hurst)
      ]),
      Err(err) => table.add_row(row![kind.label(), steps, err, "-", "-"]),
    };
  }

  table.printstd();
  Ok(())
}
