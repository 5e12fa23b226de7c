use rand::Rng;

use crate::constants::{ADDRESS_MASK, GLYPH_HEIGHT, SPRITE_SHEET_ADDR};
use crate::error::Chip8Error;
use crate::frame::{draw_sprite, BLANK_FRAME};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::state::State;

/// Width of one instruction in bytes
const STEP: u16 = 0x2;

/// Applies a decoded instruction to `state`.
///
/// Every instruction either advances the pc by one instruction, skips one
/// instruction, or sets the pc outright. `LD Vx, K` is the exception: it leaves
/// the pc where it is and parks `x` in `register_needing_key` until a key arrives.
///
/// On error `state` is left untouched.
pub fn execute<R: Rng>(
    instruction: Instruction,
    state: &mut State,
    keypad: &mut Keypad,
    rng: &mut R,
) -> Result<(), Chip8Error> {
    match instruction {
        // clear
        Instruction::Cls => {
            state.frame_buffer = BLANK_FRAME;
            state.draw_flag = true;
            advance(state);
        }
        // PC = STACK.pop() + 2
        Instruction::Ret => {
            let addr = state.pop()?;
            state.pc = addr;
            advance(state);
        }
        // PC = addr
        Instruction::Jp { addr } => state.pc = addr,
        // STACK.push(PC); PC = addr
        Instruction::Call { addr } => {
            state.push(state.pc)?;
            state.pc = addr;
        }
        Instruction::SeByte { x, kk } => {
            let equal = state.v[x as usize] == kk;
            skip_if(state, equal);
        }
        Instruction::SneByte { x, kk } => {
            let equal = state.v[x as usize] == kk;
            skip_if(state, !equal);
        }
        Instruction::SeReg { x, y } => {
            let equal = state.v[x as usize] == state.v[y as usize];
            skip_if(state, equal);
        }
        Instruction::LdByte { x, kk } => {
            state.v[x as usize] = kk;
            advance(state);
        }
        // no carry
        Instruction::AddByte { x, kk } => {
            state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
            advance(state);
        }
        Instruction::LdReg { x, y } => {
            state.v[x as usize] = state.v[y as usize];
            advance(state);
        }
        Instruction::Or { x, y } => {
            state.v[x as usize] |= state.v[y as usize];
            advance(state);
        }
        Instruction::And { x, y } => {
            state.v[x as usize] &= state.v[y as usize];
            advance(state);
        }
        Instruction::Xor { x, y } => {
            state.v[x as usize] ^= state.v[y as usize];
            advance(state);
        }
        // Vx += Vy; VF = carry
        Instruction::AddReg { x, y } => {
            let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
            set_with_flag(state, x, res, over);
        }
        // Vx -= Vy; VF = !borrow
        Instruction::Sub { x, y } => {
            let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
            set_with_flag(state, x, res, !under);
        }
        // Vx >>= 1; VF = the bit shifted out
        Instruction::Shr { x } => {
            let vx = state.v[x as usize];
            set_with_flag(state, x, vx >> 1, vx & 0x1 == 0x1);
        }
        // Vx = Vy - Vx; VF = !borrow
        Instruction::Subn { x, y } => {
            let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
            set_with_flag(state, x, res, !under);
        }
        // Vx <<= 1; VF = the bit shifted out
        Instruction::Shl { x } => {
            let vx = state.v[x as usize];
            set_with_flag(state, x, vx << 1, vx & 0x80 == 0x80);
        }
        Instruction::SneReg { x, y } => {
            let equal = state.v[x as usize] == state.v[y as usize];
            skip_if(state, !equal);
        }
        Instruction::LdI { addr } => {
            state.i = addr;
            advance(state);
        }
        // PC = V0 + addr, over the full 12 bits
        Instruction::JpV0 { addr } => {
            state.pc = (u16::from(state.v[0x0]) + addr) & ADDRESS_MASK;
        }
        // Vx = rand_byte & kk
        Instruction::Rnd { x, kk } => {
            let rand_byte: u8 = rng.gen();
            state.v[x as usize] = rand_byte & kk;
            advance(state);
        }
        Instruction::Drw { x, y, n } => draw(state, x, y, n),
        Instruction::Skp { x } => {
            let pressed = keypad.is_pressed(state.v[x as usize]);
            skip_if(state, pressed);
        }
        Instruction::Sknp { x } => {
            let pressed = keypad.is_pressed(state.v[x as usize]);
            skip_if(state, !pressed);
        }
        Instruction::LdVxDt { x } => {
            state.v[x as usize] = state.delay_timer;
            advance(state);
        }
        // await keypress for Vx; presses from before now don't count
        Instruction::LdVxKey { x } => {
            keypad.clear_press();
            state.register_needing_key = Some(x);
        }
        Instruction::LdDtVx { x } => {
            state.delay_timer = state.v[x as usize];
            advance(state);
        }
        Instruction::LdStVx { x } => {
            state.sound_timer = state.v[x as usize];
            advance(state);
        }
        Instruction::AddI { x } => {
            state.i = state.i.wrapping_add(u16::from(state.v[x as usize])) & ADDRESS_MASK;
            advance(state);
        }
        // I = address of the glyph for Vx
        Instruction::LdGlyph { x } => {
            state.i = SPRITE_SHEET_ADDR + u16::from(state.v[x as usize]) * GLYPH_HEIGHT;
            advance(state);
        }
        Instruction::LdBcd { x } => bcd(state, x),
        Instruction::Store { x } => store(state, x),
        Instruction::Read { x } => read(state, x),
    }
    Ok(())
}

/// Moves the pc on to the next instruction
fn advance(state: &mut State) {
    state.pc = state.pc.wrapping_add(STEP) & ADDRESS_MASK;
}

/// Moves the pc on by two instructions if `condition` holds, otherwise by one
fn skip_if(state: &mut State, condition: bool) {
    let distance = if condition { STEP * 2 } else { STEP };
    state.pc = state.pc.wrapping_add(distance) & ADDRESS_MASK;
}

/// Stores an ALU result, then the flag.
/// VF is written last so that it holds the flag even when x is 0xF.
fn set_with_flag(state: &mut State, x: u8, value: u8, flag: bool) {
    state.v[x as usize] = value;
    state.v[0xF] = u8::from(flag);
    advance(state);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased.
fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let vx = state.v[x as usize] as usize;
    let vy = state.v[y as usize] as usize;
    let rows: Vec<u8> = (0..u16::from(n))
        .map(|row| state.memory.read(state.i.wrapping_add(row)))
        .collect();

    let collision = draw_sprite(&mut state.frame_buffer, vx, vy, &rows);
    state.v[0xF] = u8::from(collision);
    state.draw_flag = true;
    advance(state);
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0u16..).zip(digits) {
        state.memory.write(state.i.wrapping_add(offset), digit);
    }
    advance(state);
}

/// mem[I..=I+x] = V0..=Vx
fn store(state: &mut State, x: u8) {
    for register in 0..=x {
        let value = state.v[register as usize];
        state.memory.write(state.i.wrapping_add(u16::from(register)), value);
    }
    advance(state);
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: u8) {
    for register in 0..=x {
        state.v[register as usize] = state.memory.read(state.i.wrapping_add(u16::from(register)));
    }
    advance(state);
}

#[cfg(test)]
mod test_operations {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use crate::frame::index;
    use rand::rngs::mock::StepRng;

    /// Decodes and executes `op` against `state` with no keys held
    fn run(op: u16, state: &mut State) {
        run_with_keys(op, state, &mut Keypad::new());
    }

    fn run_with_keys(op: u16, state: &mut State, keypad: &mut Keypad) {
        let instruction = Instruction::decode(op).unwrap();
        execute(instruction, state, keypad, &mut StepRng::new(0xFF, 0)).unwrap();
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = State::new();
        state.frame_buffer = [1; DISPLAY_WIDTH * DISPLAY_HEIGHT];
        run(0x00E0, &mut state);
        assert!(state.frame_buffer.iter().all(|&p| p == 0));
        assert!(state.draw_flag);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_2nnn_call_then_00ee_ret() {
        let mut state = State::new();
        run(0x2400, &mut state);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0], 0x200);
        assert_eq!(state.pc, 0x400);

        run(0x00EE, &mut state);
        assert_eq!(state.sp, 0x0);
        // resumes after the call
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_00ee_ret_underflow() {
        let mut state = State::new();
        let result = execute(
            Instruction::Ret,
            &mut state,
            &mut Keypad::new(),
            &mut StepRng::new(0, 0),
        );
        assert!(matches!(result, Err(Chip8Error::StackUnderflow { pc: 0x200 })));
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_2nnn_call_overflow() {
        let mut state = State::new();
        state.sp = 16;
        let result = execute(
            Instruction::Call { addr: 0x300 },
            &mut state,
            &mut Keypad::new(),
            &mut StepRng::new(0, 0),
        );
        assert!(matches!(result, Err(Chip8Error::StackOverflow { pc: 0x200 })));
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 16);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = State::new();
        run(0x1ABC, &mut state);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = State::new();
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = State::new();
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips_exactly_once() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_9xy0_sne_skips_exactly_once() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_skips_always_move_two_or_four() {
        for vx in (0..=255u8).step_by(17) {
            for vy in (0..=255u8).step_by(51) {
                for op in [0x3133u16, 0x4133, 0x5120, 0x9120] {
                    let mut state = State::new();
                    state.v[0x1] = vx;
                    state.v[0x2] = vy;
                    run(op, &mut state);
                    assert!(
                        state.pc == 0x202 || state.pc == 0x204,
                        "{:04X} moved pc to {:03X}",
                        op,
                        state.pc
                    );
                }
            }
        }
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = State::new();
        run(0x6122, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        state.v[0xF] = 0x7;
        run(0x7102, &mut state);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x7);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = State::new();
        state.v[0x2] = 0x1;
        run(0x8120, &mut state);
        assert_eq!(state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8121, &mut state);
        assert_eq!(state.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8122, &mut state);
        assert_eq!(state.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8123, &mut state);
        assert_eq!(state.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = State::new();
        state.v[0x1] = 250;
        state.v[0x2] = 10;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 4);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = State::new();
        state.v[0x1] = 10;
        state.v[0x2] = 10;
        state.v[0xF] = 0x1;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 20);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_flag_wins_when_x_is_vf() {
        let mut state = State::new();
        state.v[0xF] = 0xFF;
        state.v[0x1] = 0x01;
        run(0x8F14, &mut state);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 0x33;
        state.v[0x2] = 0x11;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_equal_is_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x0);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x12;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = State::new();
        state.v[0x1] = 0x5;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = State::new();
        state.v[0x1] = 0x84;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x42);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 5;
        state.v[0x2] = 9;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 4);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = State::new();
        state.v[0x1] = 9;
        state.v[0x2] = 5;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 252);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        run(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0xFE);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = State::new();
        state.v[0x1] = 0x4;
        run(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0x8);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = State::new();
        run(0xAABC, &mut state);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = State::new();
        state.v[0x0] = 0x2;
        run(0xBABC, &mut state);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_bnnn_jp_uses_twelve_bits() {
        let mut state = State::new();
        state.v[0x0] = 0xFF;
        run(0xBF01, &mut state);
        // 0xF01 + 0xFF = 0x1000, wraps to 0x000
        assert_eq!(state.pc, 0x000);

        let mut state = State::new();
        state.v[0x0] = 0x10;
        run(0xB2F0, &mut state);
        assert_eq!(state.pc, 0x300);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut state = State::new();
        let mut rng = StepRng::new(0xAB, 0);
        let instruction = Instruction::decode(0xC10F).unwrap();
        execute(instruction, &mut state, &mut Keypad::new(), &mut rng).unwrap();
        assert_eq!(state.v[0x1], 0x0B);
    }

    #[test]
    fn test_cxkk_rnd_reaches_full_byte() {
        let mut state = State::new();
        run(0xC1FF, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = State::new();
        state.v[0x0] = 0x1;
        state.i = 0x050;
        // Draw the 0x0 glyph with a 1x 1y offset
        run(0xD005, &mut state);
        let mut expected = BLANK_FRAME;
        for (y, row) in [[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]]
            .iter()
            .enumerate()
        {
            let start = index(1, y + 1);
            expected[start..start + 4].copy_from_slice(row);
        }
        assert!(state.frame_buffer == expected);
        assert_eq!(state.v[0xF], 0x0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = State::new();
        state.frame_buffer[0] = 1;
        state.i = 0x050;
        run(0xD001, &mut state);
        assert_eq!(state.v[0xF], 0x1)
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = State::new();
        state.i = 0x050;
        state.v[0x0] = 0x2;
        state.frame_buffer[2..6].copy_from_slice(&[0, 1, 0, 1]);
        // first row of the 0 glyph is 1 1 1 1
        run(0xD011, &mut state);
        assert_eq!(state.frame_buffer[2..6], [1, 0, 1, 0]);
    }

    #[test]
    fn test_dxyn_drw_twice_restores() {
        let mut state = State::new();
        state.i = 0x050 + 5 * 0xA;
        state.v[0x3] = 60;
        state.v[0x4] = 30;
        let before = state.frame_buffer;
        run(0xD345, &mut state);
        assert_eq!(state.v[0xF], 0x0);
        run(0xD345, &mut state);
        assert_eq!(state.v[0xF], 0x1);
        assert!(state.frame_buffer == before);
    }

    #[test]
    fn test_dxyn_drw_reads_wrap_memory() {
        let mut state = State::new();
        state.i = 0xFFF;
        state.memory.write(0xFFF, 0x80);
        state.memory.write(0x000, 0x80);
        run(0xD002, &mut state);
        assert_eq!(state.frame_buffer[index(0, 0)], 1);
        assert_eq!(state.frame_buffer[index(0, 1)], 1);
    }

    #[test]
    fn test_dxyn_drw_coordinates_from_vf() {
        let mut state = State::new();
        state.i = 0x050;
        state.v[0xF] = 10;
        run(0xDFF1, &mut state);
        assert_eq!(state.frame_buffer[index(10, 10)], 1);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = State::new();
        let mut keypad = Keypad::new();
        keypad.press(0xE);
        state.v[0x1] = 0xE;
        run_with_keys(0xE19E, &mut state, &mut keypad);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = State::new();
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = State::new();
        run(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = State::new();
        let mut keypad = Keypad::new();
        keypad.press(0xE);
        state.v[0x1] = 0xE;
        run_with_keys(0xE1A1, &mut state, &mut keypad);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = State::new();
        state.delay_timer = 0xF;
        run(0xF107, &mut state);
        assert_eq!(state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_parks_register() {
        let mut state = State::new();
        let mut keypad = Keypad::new();
        keypad.press(0x4);
        run_with_keys(0xF10A, &mut state, &mut keypad);
        assert_eq!(state.register_needing_key, Some(0x1));
        assert_eq!(state.pc, 0x200);
        // the earlier press is forgotten
        assert_eq!(keypad.take_press(), None);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = State::new();
        state.v[0x1] = 0xF;
        run(0xF115, &mut state);
        assert_eq!(state.delay_timer, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = State::new();
        state.v[0x1] = 0xF;
        run(0xF118, &mut state);
        assert_eq!(state.sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = State::new();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x2);
    }

    #[test]
    fn test_fx1e_add_wraps() {
        let mut state = State::new();
        state.i = 0xFFF;
        state.v[0x1] = 0x2;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x001);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = State::new();
        state.v[0x1] = 0x2;
        run(0xF129, &mut state);
        assert_eq!(state.i, 0x05A);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = State::new();
        state.v[0x1] = 157;
        state.i = 0x300;
        run(0xF133, &mut state);
        assert_eq!(state.memory.as_slice()[0x300..0x303], [1, 5, 7]);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = State::new();
        state.i = 0x300;
        state.v[0x0..0x6].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        run(0xF455, &mut state);
        assert_eq!(
            state.memory.as_slice()[0x300..0x306],
            [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]
        );
        assert_eq!(state.i, 0x300);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory.load(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6], 0x300).unwrap();
        run(0xF465, &mut state);
        assert_eq!(state.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
    }

    #[test]
    fn test_fx33_ld_wraps() {
        let mut state = State::new();
        state.v[0x1] = 255;
        state.i = 0xFFE;
        run(0xF133, &mut state);
        assert_eq!(state.memory.read(0xFFE), 2);
        assert_eq!(state.memory.read(0xFFF), 5);
        assert_eq!(state.memory.read(0x000), 5);
    }

    #[test]
    fn test_fx55_ld_wraps() {
        let mut state = State::new();
        state.i = 0xFFE;
        state.v[0x0..0x4].copy_from_slice(&[0x1, 0x2, 0x3, 0x4]);
        run(0xF355, &mut state);
        assert_eq!(state.memory.as_slice()[0xFFE..], [0x1, 0x2]);
        assert_eq!(state.memory.as_slice()[0x000..0x002], [0x3, 0x4]);
        assert_eq!(state.i, 0xFFE);
    }

    #[test]
    fn test_fx65_ld_wraps() {
        let mut state = State::new();
        state.i = 0xFFF;
        state.memory.write(0xFFF, 0x9);
        state.memory.write(0x000, 0x8);
        state.memory.write(0x001, 0x7);
        run(0xF265, &mut state);
        assert_eq!(state.v[0x0..0x3], [0x9, 0x8, 0x7]);
    }

    #[test]
    fn test_fx55_cannot_overwrite_sprite_sheet() {
        let mut state = State::new();
        state.i = 0x050;
        state.v[0x0] = 0x00;
        run(0xF055, &mut state);
        assert_eq!(state.memory.read(0x050), 0xF0);
    }
}
