//! Easing curve implementations
//!
//! Every curve maps progress `t` in `[0, 1]` to eased progress. Curves are
//! pure and total: inputs slightly outside the range (float drift from a
//! timer) never produce NaN.

use std::f32::consts::PI;

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;

const ELASTIC_PERIOD: f32 = 0.3;
const ELASTIC_PHASE: f32 = ELASTIC_PERIOD / 4.0;
const ELASTIC_IN_OUT_PERIOD: f32 = 0.45;
const ELASTIC_IN_OUT_PHASE: f32 = ELASTIC_IN_OUT_PERIOD / 4.0;

const BOUNCE_N: f32 = 7.5625;
const BOUNCE_D: f32 = 2.75;

#[inline]
fn ease_in_pow(t: f32, n: i32) -> f32 {
    t.powi(n)
}

#[inline]
fn ease_out_pow(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

/// First half `(2t)^n / 2`, second half mirrored on `2(1 - t)`
#[inline]
fn ease_in_out_pow(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(n) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(n) / 2.0
    }
}

pub fn linear(t: f32) -> f32 {
    t
}

pub fn ease_in_quad(t: f32) -> f32 {
    ease_in_pow(t, 2)
}

pub fn ease_out_quad(t: f32) -> f32 {
    ease_out_pow(t, 2)
}

pub fn ease_in_out_quad(t: f32) -> f32 {
    ease_in_out_pow(t, 2)
}

pub fn ease_in_cubic(t: f32) -> f32 {
    ease_in_pow(t, 3)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    ease_out_pow(t, 3)
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    ease_in_out_pow(t, 3)
}

pub fn ease_in_quart(t: f32) -> f32 {
    ease_in_pow(t, 4)
}

pub fn ease_out_quart(t: f32) -> f32 {
    ease_out_pow(t, 4)
}

pub fn ease_in_out_quart(t: f32) -> f32 {
    ease_in_out_pow(t, 4)
}

pub fn ease_in_quint(t: f32) -> f32 {
    ease_in_pow(t, 5)
}

pub fn ease_out_quint(t: f32) -> f32 {
    ease_out_pow(t, 5)
}

pub fn ease_in_out_quint(t: f32) -> f32 {
    ease_in_out_pow(t, 5)
}

pub fn ease_in_sine(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

pub fn ease_out_sine(t: f32) -> f32 {
    (t * PI / 2.0).sin()
}

pub fn ease_in_out_sine(t: f32) -> f32 {
    -0.5 * ((PI * t).cos() - 1.0)
}

pub fn ease_in_expo(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (t - 1.0))
    }
}

pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

pub fn ease_in_out_expo(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        0.5 * 2f32.powf(20.0 * t - 10.0)
    } else {
        1.0 - 0.5 * 2f32.powf(-20.0 * t + 10.0)
    }
}

pub fn ease_in_circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

pub fn ease_out_circ(t: f32) -> f32 {
    let u = t - 1.0;
    (1.0 - u * u).max(0.0).sqrt()
}

pub fn ease_in_out_circ(t: f32) -> f32 {
    if t < 0.5 {
        let u = 2.0 * t;
        (1.0 - (1.0 - u * u).max(0.0).sqrt()) / 2.0
    } else {
        let u = -2.0 * t + 2.0;
        ((1.0 - u * u).max(0.0).sqrt() + 1.0) / 2.0
    }
}

pub fn ease_in_back(t: f32) -> f32 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

pub fn ease_out_back(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
}

pub fn ease_in_out_back(t: f32) -> f32 {
    if t < 0.5 {
        let u = 2.0 * t;
        (u * u * ((BACK_C2 + 1.0) * u - BACK_C2)) / 2.0
    } else {
        let u = 2.0 * t - 2.0;
        (u * u * ((BACK_C2 + 1.0) * u + BACK_C2) + 2.0) / 2.0
    }
}

pub fn ease_in_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let u = t - 1.0;
    -(2f32.powf(10.0 * u) * ((u - ELASTIC_PHASE) * 2.0 * PI / ELASTIC_PERIOD).sin())
}

pub fn ease_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    2f32.powf(-10.0 * t) * ((t - ELASTIC_PHASE) * 2.0 * PI / ELASTIC_PERIOD).sin() + 1.0
}

pub fn ease_in_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let u = 2.0 * t - 1.0;
    let wave = ((u - ELASTIC_IN_OUT_PHASE) * 2.0 * PI / ELASTIC_IN_OUT_PERIOD).sin();
    if t < 0.5 {
        -0.5 * 2f32.powf(10.0 * u) * wave
    } else {
        0.5 * 2f32.powf(-10.0 * u) * wave + 1.0
    }
}

/// Four decaying parabolic bounces with boundaries at
/// `1/2.75`, `2/2.75` and `2.5/2.75`
pub fn ease_out_bounce(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let u = t - 1.5 / BOUNCE_D;
        BOUNCE_N * u * u + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let u = t - 2.25 / BOUNCE_D;
        BOUNCE_N * u * u + 0.9375
    } else {
        let u = t - 2.625 / BOUNCE_D;
        BOUNCE_N * u * u + 0.984375
    }
}

pub fn ease_in_bounce(t: f32) -> f32 {
    1.0 - ease_out_bounce(1.0 - t)
}

pub fn ease_in_out_bounce(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * t - 1.0)) / 2.0
    }
}
