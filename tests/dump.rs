//! Snapshots of the `dump` command output.

use plotcfg::cli::dump::DumpView;
use plotcfg::{LoadOptions, PlotConfig};

fn sample() -> PlotConfig {
    PlotConfig::from_source(
        "definecut good x>0\nnewpage 1 2 logy\ntitle Hits\nh1 good\nh2 -nostat\n",
        &LoadOptions::new("hms.cfg"),
    )
    .unwrap()
}

#[test]
fn test_text_dump_snapshot() {
    let config = sample();
    let text = DumpView::new(&config).unwrap().to_text();

    insta::assert_snapshot!(text, @r#"
    config: hms.cfg
    cut good = x>0
    canvas: 1120x1080
    plot file: summaryPlots_0_hms.pdf

    page 1: "Hits" 1x2 logy
      [0] variable=h1 cut=good
      [1] variable=h2 nostat=nostat
    "#);
}

#[test]
fn test_draw_command_json_snapshot() {
    let config = sample();
    let cmd = config.draw_command(0, 0).unwrap();

    insta::assert_json_snapshot!(cmd, @r#"
    {
      "variable": "h1",
      "cut": "good"
    }
    "#);
}
