//! Line productions of the IR grammar
//!
//! Every production is a pattern anchored at the start of a trimmed line.
//! Fields after the leading keyword are optional in the patterns, so a
//! line that only partially fits still yields whatever fields it has; the
//! caller learns what was missing through `Matched::missing`.

use eir_common::{ValueType, VReg, MAX_OPERANDS};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::ir::{BinaryOp, CompareKind, Global, InstrKind, Instruction};

static GLOBAL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@([^\s=]*)").unwrap());
static GLOBAL_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^@[^\s=]*\s*=\s*c"([^"]*)"#).unwrap());
static GLOBAL_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@[^\s=]*\s*=\s*i32\s+(\S+)").unwrap());

static FUNC_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^func\s+@([^(\s]+)(?:\s*\([^)]*\))?(?:\s*->\s*(\w+))?").unwrap()
});
static FUNC_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^func\b").unwrap());

static CONST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:%(-?\d+)\s*=\s*)?const\b(?:\s+(\S+))?(?:\s+(\S+))?").unwrap()
});
static ASSIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^%(-?\d+)\s*=\s*(\w+)\b(?:\s+(\w+))?(?:\s+%(-?\d+))?(?:\s+%(-?\d+))?").unwrap()
});
static GOTO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^goto\b(?:\s+(\S+))?").unwrap());
static IF_GOTO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^if_goto\b(?:\s+%(-?\d+))?(?:\s+(\S+))?").unwrap()
});
static CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:%(-?\d+)\s*=\s*)?call\b(?:\s*@([^(\s]+))?(?:\s*\(([^)]*)\)?)?").unwrap()
});
static PUTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^puts\b(?:\s*@(\S+))?").unwrap());
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^\s:%@][^\s:]*):").unwrap());
static RET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ret\b(?:\s+%(-?\d+))?").unwrap());

/// Outcome of a production that recognized its leading shape
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Matched<T> {
    pub value: T,
    /// First field the line was expected to carry but did not
    pub missing: Option<&'static str>,
}

impl<T> Matched<T> {
    fn new(value: T) -> Self {
        Self { value, missing: None }
    }

    /// Remember the first missing field only
    fn missing(&mut self, field: &'static str) {
        if self.missing.is_none() {
            self.missing = Some(field);
        }
    }
}

/// Function header fields
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Header {
    pub name: String,
    pub return_type: ValueType,
}

/// Binary operators with source syntax. `ge`, `le` and `ne` exist in the
/// instruction model but have no keyword here.
fn operator_kind(word: &str) -> Option<InstrKind> {
    let kind = match word {
        "add" => InstrKind::Binary(BinaryOp::Add),
        "sub" => InstrKind::Binary(BinaryOp::Sub),
        "mul" => InstrKind::Binary(BinaryOp::Mul),
        "div" => InstrKind::Binary(BinaryOp::Div),
        "mod" => InstrKind::Binary(BinaryOp::Mod),
        "gt" => InstrKind::Compare(CompareKind::Gt),
        "lt" => InstrKind::Compare(CompareKind::Lt),
        "eq" => InstrKind::Compare(CompareKind::Eq),
        _ => return None,
    };
    Some(kind)
}

/// Parse a `%N` register number. Negative numbers are the absent state.
fn parse_reg(text: &str) -> Option<VReg> {
    text.parse::<i64>().ok().and_then(|n| VReg::try_from(n).ok())
}

fn cap_reg(caps: &Captures, index: usize) -> Option<VReg> {
    caps.get(index).and_then(|m| parse_reg(m.as_str()))
}

fn cap_str<'a>(caps: &Captures<'a>, index: usize) -> Option<&'a str> {
    caps.get(index).map(|m| m.as_str())
}

/// Parse an immediate, truncating fractional values toward zero. Hex
/// integers (`0x10`, `-0X1f`) are accepted as well.
fn parse_immediate(text: &str) -> Option<i64> {
    text.parse::<i64>()
        .ok()
        .or_else(|| parse_hex(text))
        .or_else(|| text.parse::<f64>().ok().map(|v| v.trunc() as i64))
}

fn parse_hex(text: &str) -> Option<i64> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    let value = i64::from_str_radix(digits, 16).ok()?;
    Some(if negative { -value } else { value })
}

/// `@name = c"literal"` or `@name = i32 value`
pub(crate) fn global(line: &str) -> Option<Matched<Global>> {
    let name = GLOBAL_NAME.captures(line).and_then(|c| cap_str(&c, 1))?;

    let (ty, value) = if line.contains("c\"") {
        let value = GLOBAL_STRING.captures(line).and_then(|c| cap_str(&c, 1).map(str::to_string));
        (ValueType::Str, value)
    } else {
        let value = GLOBAL_INT.captures(line).and_then(|c| cap_str(&c, 1).map(str::to_string));
        (ValueType::I32, value)
    };

    let mut matched = Matched::new(Global {
        name: name.to_string(),
        ty,
        value: value.clone().unwrap_or_default(),
    });
    if name.is_empty() {
        matched.missing("global name");
    }
    if value.is_none() {
        matched.missing("global value");
    }
    Some(matched)
}

/// Whether the line opens with the `func` keyword
pub(crate) fn is_function_header(line: &str) -> bool {
    FUNC_KEYWORD.is_match(line)
}

/// `func @name(params) -> rettype`
pub(crate) fn function_header(line: &str) -> Option<Matched<Header>> {
    let caps = FUNC_HEADER.captures(line)?;
    let name = cap_str(&caps, 1)?.to_string();
    let mut matched = Matched::new(Header {
        name,
        return_type: ValueType::Void,
    });
    match cap_str(&caps, 2) {
        Some(keyword) => matched.value.return_type = ValueType::from_return_keyword(keyword),
        None => matched.missing("return type"),
    }
    Some(matched)
}

/// `%D = const TYPE VALUE`
pub(crate) fn constant(line: &str) -> Option<Matched<Instruction>> {
    let caps = CONST.captures(line)?;
    let mut matched = Matched::new(Instruction::new(InstrKind::Const));
    let inst = &mut matched.value;

    inst.dst = cap_reg(&caps, 1);
    inst.ty = cap_str(&caps, 2).map(ValueType::from_operand_keyword).unwrap_or_default();
    let imm = cap_str(&caps, 3).and_then(parse_immediate);
    inst.imm = imm.unwrap_or(0);

    if inst.dst.is_none() {
        matched.missing("destination register");
    }
    if cap_str(&caps, 2).is_none() {
        matched.missing("type");
    }
    if imm.is_none() {
        matched.missing("constant value");
    }
    Some(matched)
}

/// `%D = OP TYPE %S1 %S2`. Any other word after `=`, apart from `const`
/// and `call`, keeps the destination under an `Unknown` kind.
pub(crate) fn assignment(line: &str) -> Option<Matched<Instruction>> {
    let caps = ASSIGN.captures(line)?;
    let word = cap_str(&caps, 2)?;
    if word == "call" || word == "const" {
        return None;
    }

    let mut inst = Instruction::new(InstrKind::Unknown);
    inst.dst = cap_reg(&caps, 1);
    inst.ty = cap_str(&caps, 3).map(ValueType::from_operand_keyword).unwrap_or_default();
    inst.srcs = [cap_reg(&caps, 4), cap_reg(&caps, 5)].into_iter().flatten().collect();

    let complete = cap_str(&caps, 3).is_some() && inst.srcs.len() == 2;
    let mut matched = Matched::new(inst);
    match operator_kind(word) {
        Some(kind) if complete => matched.value.kind = kind,
        Some(_) => matched.missing("operator operands"),
        None => matched.missing("known operator"),
    }
    if matched.value.dst.is_none() {
        matched.missing("destination register");
    }
    Some(matched)
}

/// `goto LABEL`
pub(crate) fn goto(line: &str) -> Option<Matched<Instruction>> {
    let caps = GOTO.captures(line)?;
    let inst = Instruction::new(InstrKind::Goto).with_label(cap_str(&caps, 1).unwrap_or(""));
    let mut matched = Matched::new(inst);
    if matched.value.label.is_none() {
        matched.missing("target label");
    }
    Some(matched)
}

/// `if_goto %S LABEL`
pub(crate) fn if_goto(line: &str) -> Option<Matched<Instruction>> {
    let caps = IF_GOTO.captures(line)?;
    let mut inst = Instruction::new(InstrKind::IfGoto);
    inst.srcs = cap_reg(&caps, 1).into_iter().collect();
    if let Some(label) = cap_str(&caps, 2) {
        inst = inst.with_label(label);
    }

    let mut matched = Matched::new(inst);
    if matched.value.src(0).is_none() {
        matched.missing("condition register");
    }
    if matched.value.label.is_none() {
        matched.missing("target label");
    }
    Some(matched)
}

/// `%D = call @NAME(%A1, %A2, ...)` or `call @NAME(...)`
pub(crate) fn call(line: &str) -> Option<Matched<Instruction>> {
    let caps = CALL.captures(line)?;
    let mut inst = Instruction::new(InstrKind::Call);
    inst.dst = cap_reg(&caps, 1);
    if let Some(target) = cap_str(&caps, 2) {
        inst = inst.with_label(target);
    }

    let mut matched = Matched::new(inst);
    if matched.value.label.is_none() {
        matched.missing("call target");
    }

    let args_text = cap_str(&caps, 3).unwrap_or("");
    for token in args_text.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim_start_matches('%');
        if token.is_empty() {
            continue;
        }
        match parse_reg(token) {
            Some(_) if matched.value.srcs.len() == MAX_OPERANDS => {
                matched.missing("room for more than 8 arguments");
            }
            Some(reg) => matched.value.srcs.push(reg),
            None => matched.missing("argument register"),
        }
    }
    Some(matched)
}

/// `puts @NAME`
pub(crate) fn puts(line: &str) -> Option<Matched<Instruction>> {
    let caps = PUTS.captures(line)?;
    let inst = Instruction::new(InstrKind::Puts).with_label(cap_str(&caps, 1).unwrap_or(""));
    let mut matched = Matched::new(inst);
    if matched.value.label.is_none() {
        matched.missing("global name");
    }
    Some(matched)
}

/// `LABEL:`
pub(crate) fn label(line: &str) -> Option<Matched<Instruction>> {
    let caps = LABEL.captures(line)?;
    cap_str(&caps, 1).map(|name| Matched::new(Instruction::label(name)))
}

/// `ret [%S]`
pub(crate) fn ret(line: &str) -> Option<Matched<Instruction>> {
    let caps = RET.captures(line)?;
    Some(Matched::new(Instruction::ret(cap_reg(&caps, 1))))
}

/// Instruction productions in precedence order
pub(crate) const INSTRUCTION_PRODUCTIONS: [fn(&str) -> Option<Matched<Instruction>>; 8] =
    [constant, assignment, goto, if_goto, call, puts, label, ret];
