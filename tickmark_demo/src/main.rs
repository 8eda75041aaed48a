// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demos for `tickmark_axis`.
//!
//! Writes a standalone SVG with two small charts, each framed by a left and a
//! bottom axis. Margins come from `estimate_label_margin`, so the label space is
//! reserved before anything is rendered.
//!
//! Usage: `tickmark_demo [OUTPUT.svg]` (set `RUST_LOG=debug` to see layout decisions).

use anyhow::Context;
use kurbo::{Size, Vec2};
use tickmark_axis::{Axis, AxisOrient, LinearScale, LogScale, OrdinalScale, Scale};
use tickmark_markup::{Element, svg_document};

const PANEL: Size = Size::new(360.0, 240.0);
const PADDING: f64 = 12.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("tickmark_demo.svg"));

    let axis = Axis::new(5);
    let panels = [
        panel(
            &axis,
            &LinearScale::new((-18.0, 83.0)).niced(axis.tick_count),
            &OrdinalScale::new(["Q1", "Q2", "Q3", "Q4"]),
        )
        .context("revenue panel")?,
        panel(
            &axis,
            &LogScale::new((1.0, 100_000.0)),
            &LinearScale::new((0.0, 1.0)).with_formatter(|v| format!("{:.0}%", v * 100.0)),
        )
        .context("latency panel")?,
    ];

    let mut doc = svg_document(PANEL.width * panels.len() as f64, PANEL.height);
    for (i, body) in panels.into_iter().enumerate() {
        let mut frame = Element::new("g")
            .with_attr("transform", format!("translate({} 0)", PANEL.width * i as f64));
        frame.append(body);
        doc.append(frame);
    }

    std::fs::write(&out, doc.to_svg_string()).with_context(|| format!("writing {out}"))?;
    log::info!("wrote {out}");
    println!("wrote {out}");
    Ok(())
}

/// Lays out one chart panel: reserves label margins, then renders both axes.
fn panel<Y, X>(axis: &Axis, y: &Y, x: &X) -> anyhow::Result<Element>
where
    Y: Scale + ?Sized,
    X: Scale + ?Sized,
{
    let tick_extent = 2.0 * axis.style.tick_size;
    let left = axis.estimate_label_margin(y, AxisOrient::Left)?;
    let bottom = axis.estimate_label_margin(x, AxisOrient::Bottom)?;

    // Half a label line of headroom keeps the top tick label inside the panel.
    let top = PADDING + 0.5 * axis.style.label_char_height;
    let offset = Vec2::new(PADDING + left + tick_extent, top);
    let body = Size::new(
        PANEL.width - offset.x - PADDING,
        PANEL.height - offset.y - bottom - tick_extent - PADDING,
    );
    log::debug!("panel body {body:?} at {offset:?} (left margin {left}, bottom margin {bottom})");

    let mut group = Element::new("g")
        .with_attr("transform", format!("translate({} {})", offset.x, offset.y));
    group.append(axis.render(body, y, AxisOrient::Left)?);
    group.append(axis.render(body, x, AxisOrient::Bottom)?);
    Ok(group)
}
