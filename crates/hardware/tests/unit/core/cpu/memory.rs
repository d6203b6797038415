//! # CPU Memory Access Tests
//!
//! Loads and stores driven through the whole datapath, including address
//! formation from base register plus offset, growth of the data store, and
//! the failure paths for addresses outside it.

use crate::common::builder::instruction::{HALT, InstructionBuilder};
use crate::common::harness::TestContext;
use rv32_core::common::SimError;

#[test]
fn store_then_load_round_trips() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 0x123).build(),
        InstructionBuilder::new().sw(0, 1, 8).build(),
        InstructionBuilder::new().lw(2, 0, 8).build(),
        HALT,
    ];
    let mut ctx = TestContext::new(&program);
    ctx.run();

    assert_eq!(ctx.reg(2), 0x123);
    assert_eq!(ctx.cpu.stats.cycles, 3);
}

#[test]
fn full_word_value_survives_store_and_load() {
    let program = [
        InstructionBuilder::new().lw(1, 0, 0).build(),
        InstructionBuilder::new().sw(0, 1, 8).build(),
        InstructionBuilder::new().lw(2, 0, 8).build(),
        HALT,
    ];
    let mut ctx = TestContext::with_data(&program, &[0x1234_5678]);
    ctx.run();

    assert_eq!(ctx.reg(1), 0x1234_5678);
    assert_eq!(ctx.reg(2), 0x1234_5678);
    assert_eq!(&ctx.cpu.dmem.dump()[8..], &[0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn store_grows_data_memory() {
    let program = [
        InstructionBuilder::new().addi(1, 0, -1).build(),
        InstructionBuilder::new().sw(0, 1, 8).build(),
        HALT,
    ];
    let mut ctx = TestContext::new(&program);
    ctx.run();

    assert_eq!(ctx.cpu.dmem.dump().len(), 12);
    assert_eq!(&ctx.cpu.dmem.dump()[8..], &[0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(&ctx.cpu.dmem.dump()[..8], &[0; 8]);
}

#[test]
fn load_beyond_data_end_reads_zero() {
    let program = [
        InstructionBuilder::new().lw(1, 0, 40).build(),
        HALT,
    ];
    let mut ctx = TestContext::with_data(&program, &[0x55AA]);
    ctx.run();

    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.cpu.dmem.dump().len(), 44, "read extends the store");
}

#[test]
fn load_uses_base_register_plus_offset() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 4).build(),
        InstructionBuilder::new().lw(2, 1, 4).build(),
        HALT,
    ];
    let mut ctx = TestContext::with_data(&program, &[10, 20, 30]);
    ctx.run();

    assert_eq!(ctx.reg(2), 30, "address 4 + 4 selects the third word");
}

#[test]
fn load_with_negative_offset() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 8).build(),
        InstructionBuilder::new().lw(2, 1, -4).build(),
        HALT,
    ];
    let mut ctx = TestContext::with_data(&program, &[10, 20, 30]);
    ctx.run();

    assert_eq!(ctx.reg(2), 20);
}

#[test]
fn misaligned_access_uses_enclosing_word() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 0x77).build(),
        InstructionBuilder::new().sw(0, 1, 5).build(),
        InstructionBuilder::new().lw(2, 0, 4).build(),
        InstructionBuilder::new().lw(3, 0, 6).build(),
        HALT,
    ];
    let mut ctx = TestContext::new(&program);
    ctx.run();

    assert_eq!(ctx.reg(2), 0x77, "store at 5 lands on the word at 4");
    assert_eq!(ctx.reg(3), 0x77, "load at 6 reads the word at 4");
}

#[test]
fn negative_address_fails_the_cycle() {
    let program = [
        InstructionBuilder::new().addi(1, 0, -4).build(),
        InstructionBuilder::new().lw(2, 1, 0).build(),
    ];
    let mut ctx = TestContext::new(&program);
    ctx.step_once();

    let err = ctx.cpu.step().unwrap_err();
    assert!(matches!(err, SimError::DataAddress { addr: -4, .. }));
}

#[test]
fn access_at_growth_limit_fails() {
    // Sixteen doublings of 1 produce 65536, one word past the last legal
    // base address under the default 64 KiB limit.
    let mut program = vec![InstructionBuilder::new().addi(1, 0, 1).build()];
    for _ in 0..16 {
        program.push(InstructionBuilder::new().add(1, 1, 1).build());
    }
    program.push(InstructionBuilder::new().lw(2, 1, 0).build());

    let mut ctx = TestContext::new(&program);
    for _ in 0..17 {
        ctx.step_once();
    }

    let err = ctx.cpu.step().unwrap_err();
    assert!(matches!(
        err,
        SimError::DataAddress {
            addr: 65536,
            limit: 65536
        }
    ));
}

#[test]
fn access_just_below_limit_succeeds() {
    let mut program = vec![InstructionBuilder::new().addi(1, 0, 1).build()];
    for _ in 0..16 {
        program.push(InstructionBuilder::new().add(1, 1, 1).build());
    }
    program.push(InstructionBuilder::new().lw(2, 1, -4).build());
    program.push(HALT);

    let mut ctx = TestContext::new(&program);
    ctx.run();

    assert_eq!(ctx.reg(2), 0);
    assert_eq!(ctx.cpu.dmem.dump().len(), 65536);
}
