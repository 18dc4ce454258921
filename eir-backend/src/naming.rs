//! Register naming policy
//!
//! Maps a virtual register and a value type to a physical AArch64 register.
//! The mapping is stateless and ignores liveness: the physical index is the
//! virtual number modulo 31, so `%0` and `%31` name the same register. There
//! is no allocator and no spilling; programs that keep two congruent virtual
//! registers live at once will clobber one of them.
//!
//! The scratch register `w30`/`x30` used by constant and modulo lowering is
//! outside this mapping but is reachable from it (`%30`, `%61`, ...).

use eir_codegen::Reg;
use eir_common::{ValueType, VReg};

/// Number of general purpose registers the policy cycles through
pub const PHYSICAL_REGISTERS: u32 = 31;

/// Physical register number for a virtual register. An absent register
/// maps to index 0.
pub fn physical_index(vreg: Option<VReg>) -> u8 {
    match vreg {
        Some(v) => (v % PHYSICAL_REGISTERS) as u8,
        None => 0,
    }
}

/// Physical register for `vreg` accessed as a value of type `ty`
///
/// `s` for f32, `d` for f64, `w` for i32 and bool, `x` for everything else.
pub fn register_for(vreg: Option<VReg>, ty: ValueType) -> Reg {
    let idx = physical_index(vreg);
    match ty {
        ValueType::F32 => Reg::S(idx),
        ValueType::F64 => Reg::D(idx),
        ty if ty.is_word() => Reg::W(idx),
        _ => Reg::X(idx),
    }
}

/// Assembly name of `register_for(vreg, ty)`
pub fn register_name(vreg: Option<VReg>, ty: ValueType) -> String {
    register_for(vreg, ty).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_by_type() {
        assert_eq!(register_name(Some(3), ValueType::I32), "w3");
        assert_eq!(register_name(Some(3), ValueType::Bool), "w3");
        assert_eq!(register_name(Some(3), ValueType::F32), "s3");
        assert_eq!(register_name(Some(3), ValueType::F64), "d3");
        assert_eq!(register_name(Some(3), ValueType::Str), "x3");
        assert_eq!(register_name(Some(3), ValueType::Void), "x3");
    }

    #[test]
    fn test_absent_register_maps_to_zero() {
        assert_eq!(physical_index(None), 0);
        assert_eq!(register_name(None, ValueType::I32), "w0");
    }

    #[test]
    fn test_mapping_is_pure() {
        for v in [0, 7, 30, 31, 1000] {
            assert_eq!(register_for(Some(v), ValueType::F64), register_for(Some(v), ValueType::F64));
        }
    }

    #[test]
    fn test_congruent_registers_alias() {
        assert_eq!(register_name(Some(31), ValueType::I32), register_name(Some(0), ValueType::I32));
        assert_eq!(register_name(Some(32), ValueType::F32), register_name(Some(1), ValueType::F32));
        assert_eq!(register_name(Some(30), ValueType::I32), "w30");
        assert_eq!(register_name(Some(61), ValueType::I32), "w30");
        assert_ne!(register_name(Some(1), ValueType::I32), register_name(Some(2), ValueType::I32));
    }
}
