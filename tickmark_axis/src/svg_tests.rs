// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use kurbo::Size;

use crate::{Axis, AxisOrient, LinearScale};

fn small_axis_svg(orient: AxisOrient) -> alloc::string::String {
    let axis = Axis::new(2);
    let scale = LinearScale::new((0.0, 10.0));
    axis.render(Size::new(100.0, 50.0), &scale, orient)
        .unwrap()
        .to_svg_string()
}

#[test]
fn bottom_axis_svg() {
    insta::assert_snapshot!(small_axis_svg(AxisOrient::Bottom), @r##"
    <g class="axis bottom">
      <g class="tick">
        <line x1="0" y1="0" x2="0" y2="54" stroke="#a8a8a8" stroke-width="1px"/>
        <text x="0" y="58" dy="1em" fill="#9c9c9c" text-anchor="middle" font-family="Monaco" font-size="14px">0</text>
      </g>
      <g class="tick">
        <line x1="50" y1="0" x2="50" y2="54" stroke="#eeeeee" stroke-width="1px"/>
        <text x="50" y="58" dy="1em" fill="#9c9c9c" text-anchor="middle" font-family="Monaco" font-size="14px">5</text>
      </g>
      <g class="tick">
        <line x1="100" y1="0" x2="100" y2="54" stroke="#eeeeee" stroke-width="1px"/>
        <text x="100" y="58" dy="1em" fill="#9c9c9c" text-anchor="middle" font-family="Monaco" font-size="14px">10</text>
      </g>
    </g>
    "##);
}

#[test]
fn left_axis_svg() {
    insta::assert_snapshot!(small_axis_svg(AxisOrient::Left), @r##"
    <g class="axis left">
      <g class="tick">
        <line x1="-4" y1="50" x2="100" y2="50" stroke="#a8a8a8" stroke-width="1px"/>
        <text x="-8" y="50" dy="0.32em" fill="#9c9c9c" text-anchor="end" font-family="Monaco" font-size="14px">0</text>
      </g>
      <g class="tick">
        <line x1="-4" y1="25" x2="100" y2="25" stroke="#eeeeee" stroke-width="1px"/>
        <text x="-8" y="25" dy="0.32em" fill="#9c9c9c" text-anchor="end" font-family="Monaco" font-size="14px">5</text>
      </g>
      <g class="tick">
        <line x1="-4" y1="0" x2="100" y2="0" stroke="#eeeeee" stroke-width="1px"/>
        <text x="-8" y="0" dy="0.32em" fill="#9c9c9c" text-anchor="end" font-family="Monaco" font-size="14px">10</text>
      </g>
    </g>
    "##);
}
