// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with:
//     cargo run --example basic_usage --features logging

use generic_math::prelude::*;

fn main() {
    // Debug level shows rejected dispatches and failed checked narrowing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Generic Math Example ===\n");

    // Natural results: any numeric input, f64 output
    println!("Natural results:");
    println!("  sqrt(2u8)        = {}", sqrt(2u8));
    println!("  atan2(1i32, -1)  = {}", atan2(1i32, -1i32));
    println!("  gamma(5u64)      = {}", gamma(5u64));
    println!("  erfinv(0.5f32)   = {}", erfinv(0.5f32));
    println!("  jn(2, 3.0)       = {}", jn(2, 3.0f64));
    println!("  sincos(0i16)     = {:?}", sincos(0i16));
    println!("  frexp(8u32)      = {:?}", frexp(8u32));
    println!("  lgamma(-0.5)     = {:?}", lgamma(-0.5f64));
    println!();

    // Same-kind results: the caller's type comes back
    println!("Same-kind results:");
    let floored: i64 = floor(-7i64);
    let biggest: u8 = max(200u8, 17u8);
    let fused: i32 = fma(6i32, 7i32, -2i32);
    println!("  floor(-7i64)     = {}", floored);
    println!("  max(200u8, 17u8) = {}", biggest);
    println!("  fma(6, 7, -2)    = {}", fused);
    println!("  abs(i8::MIN)     = {} (saturated)", abs(i8::MIN));
    println!();

    // Checked narrowing reports what plain narrowing clamps
    println!("Checked narrowing:");
    match checked::abs(i8::MIN) {
        Ok(v) => println!("  checked::abs(i8::MIN) = {}", v),
        Err(e) => println!("  checked::abs(i8::MIN) failed: {}", e),
    }
    println!("  checked::fma(200u8, 2, 0) = {:?}", checked::fma(200u8, 2u8, 0u8));
    println!();

    // Runtime dispatch through the operation table
    println!("Operation table:");
    for name in ["hypot", "round_to_even", "ilogb", "secant"] {
        let args: &[f64] = if name == "hypot" { &[3.0, 4.0] } else { &[2.5] };
        match evaluate_named(name, args, 0) {
            Ok(outcome) => println!("  {:<14} -> {:?}", name, outcome),
            Err(e) => println!("  {:<14} -> error: {}", name, e),
        }
    }
    println!();

    println!("Same-kind operations:");
    for op in Operation::same_kind() {
        println!("  {:<14} arity {}", op, op.arity());
    }
}
