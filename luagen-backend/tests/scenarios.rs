//! End-to-end translation tests using only the public API

use luagen_backend::{
    op_info, translate, translate_to_string, ErrorKind, ErrorReporter, Family, Function, Module,
    Opcode, Operand, Prototype, TranslateError, TranslateOptions,
};
use luagen_backend::ErrorPolicy;
use luagen_ir::{Type, Var};
use pretty_assertions::assert_eq;

fn i64_var(name: &str) -> Var {
    Var::new(name, Type::I64)
}

fn add_function() -> Function {
    let mut func = Function::new("add", vec![i64_var("a"), i64_var("b")]).with_results(vec![Type::I64]);
    let a = func.reg_op("a").unwrap();
    let b = func.reg_op("b").unwrap();
    func.emit(Opcode::Add, vec![a, a, b]);
    func.emit(Opcode::Ret, vec![a]);
    func
}

fn run(module: &Module) -> (Result<String, TranslateError>, ErrorReporter) {
    let mut reporter = ErrorReporter::new();
    let result = translate_to_string(module, &mut reporter, &TranslateOptions::default());
    (result, reporter)
}

#[test]
fn test_add_function() {
    let mut module = Module::new("add");
    module.add_function(add_function());

    let (result, reporter) = run(&module);
    assert_eq!(
        result.unwrap(),
        "function add(a, b)\n    a = a + b\n    return a\nend\n"
    );
    assert!(!reporter.has_errors());
}

#[test]
fn test_zero_result_call_to_import() {
    let mut module = Module::new("logging");
    let proto = module.add_proto(Prototype::new("log_p", vec![], vec![i64_var("v")]));
    let log = module.add_import("log");
    let mut func = Function::new("main", vec![i64_var("x")]);
    let x = func.reg_op("x").unwrap();
    func.emit(Opcode::Call, vec![Operand::Ref(proto), Operand::Ref(log), x]);
    module.add_function(func);

    let (result, _) = run(&module);
    assert_eq!(result.unwrap(), "function main(x)\n    log(x);\nend\n");
}

#[test]
fn test_single_result_call_assigns() {
    let mut module = Module::new("calls");
    let proto = module.add_proto(Prototype::new("add_p", vec![Type::I64], vec![i64_var("a"), i64_var("b")]));
    let add = module.add_function(add_function());
    let mut func = Function::new("main", vec![]);
    let r = Operand::Reg(func.add_local("r", Type::I64));
    func.emit(
        Opcode::Call,
        vec![Operand::Ref(proto), r, Operand::Ref(add), Operand::Int(2), Operand::Int(40)],
    );
    func.emit(Opcode::Ret, vec![r]);
    module.add_function(func);

    let (result, _) = run(&module);
    assert_eq!(
        result.unwrap(),
        "function add(a, b)\n    a = a + b\n    return a\nend\n\
         function main()\n    local r\n    r = add(2, 40);\n    return r\nend\n"
    );
}

#[test]
fn test_two_result_call_raises_call_arity_error() {
    let mut module = Module::new("multi");
    module.add_function(add_function());
    let proto = module.add_proto(Prototype::new("divmod_p", vec![Type::I64, Type::I64], vec![]));
    let divmod = module.add_import("divmod");
    let mut func = Function::new("main", vec![]);
    let q = Operand::Reg(func.add_local("q", Type::I64));
    let r = Operand::Reg(func.add_local("r", Type::I64));
    func.emit(Opcode::Call, vec![Operand::Ref(proto), q, r, Operand::Ref(divmod)]);
    func.emit(Opcode::Ret, vec![q]);
    module.add_function(func);

    let mut reporter = ErrorReporter::new();
    let mut out = Vec::new();
    let result = translate(&module, &mut out, &mut reporter, &TranslateOptions::default());

    assert!(matches!(result, Err(TranslateError::CallArity { results: 2, .. })));
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.diagnostics()[0].kind, ErrorKind::CallArity);

    // Text of earlier functions and of the failing function's prologue stays
    // written; nothing is written for the call itself.
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "function add(a, b)\n    a = a + b\n    return a\nend\n\
         function main()\n    local q\n    local r\n"
    );
    assert!(!text.contains("divmod"));
}

#[test]
fn test_call_arity_error_with_continue_policy() {
    let mut module = Module::new("multi");
    let proto = module.add_proto(Prototype::new("pair_p", vec![Type::I64, Type::I64], vec![]));
    let pair = module.add_import("pair");
    let mut func = Function::new("main", vec![]);
    let a = Operand::Reg(func.add_local("a", Type::I64));
    let b = Operand::Reg(func.add_local("b", Type::I64));
    func.emit(Opcode::Call, vec![Operand::Ref(proto), a, b, Operand::Ref(pair)]);
    func.emit(Opcode::Ret, vec![]);
    module.add_function(func);

    let mut reporter = ErrorReporter::new();
    let options = TranslateOptions {
        error_policy: ErrorPolicy::Continue,
        ..TranslateOptions::default()
    };
    let text = translate_to_string(&module, &mut reporter, &options).unwrap();
    assert_eq!(text, "function main()\n    local a\n    local b\n    return\nend\n");
    assert_eq!(reporter.error_count(), 1);
}

#[test]
fn test_only_declarations_emit_nothing() {
    let mut module = Module::new("decls");
    module.add_proto(Prototype::new("p", vec![], vec![]));
    module.add_import("print");
    module.add_export("main");
    module.add_forward("main");

    let (result, reporter) = run(&module);
    assert_eq!(result.unwrap(), "");
    assert!(!reporter.has_errors());
}

#[test]
fn test_parameter_and_local_counts() {
    let params: Vec<Var> = ["p0", "p1", "p2"].iter().map(|n| i64_var(n)).collect();
    let mut func = Function::new("shape", params);
    for name in ["l0", "l1", "l2", "l3", "l4"] {
        func.add_local(name, Type::D);
    }
    let mut module = Module::new("shape");
    module.add_function(func);

    let text = run(&module).0.unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "function shape(p0, p1, p2)");
    assert_eq!(lines.iter().filter(|l| l.trim_start().starts_with("local ")).count(), 5);
    assert_eq!(lines.last(), Some(&"end"));
}

/// Every opcode of a template family produces exactly the family template.
#[test]
fn test_every_family_template() {
    let mut module = Module::new("families");
    let mut func = Function::new("t", vec![i64_var("a"), i64_var("b")]);
    let d = Operand::Reg(func.add_local("d", Type::I64));
    let (a, b) = (Operand::Reg(0), Operand::Reg(1));
    func.place_label(5);
    let mut expected = vec![
        "function t(a, b)".to_string(),
        "    local d".to_string(),
        "::l5::".to_string(),
    ];

    for &code in Opcode::ALL {
        let info = op_info(code);
        let op = info.op.unwrap_or("");
        let (ops, line) = match info.family {
            Family::Move => (vec![d, a], "d = a".to_string()),
            Family::Negate => (vec![d, a], "d = 0 - a".to_string()),
            Family::Binary => (vec![d, a, b], format!("d = a {op} b")),
            Family::Compare => (vec![d, a, b], format!("d = (a {op} b)")),
            Family::Jump => (vec![Operand::Label(5)], "goto l5".to_string()),
            Family::BranchTrue => (vec![Operand::Label(5), a], "if a then goto l5 end".to_string()),
            Family::BranchFalse => (vec![Operand::Label(5), a], "if not a then goto l5 end".to_string()),
            Family::BranchCompare => (vec![Operand::Label(5), a, b], format!("if a {op} b then goto l5 end")),
            _ => continue,
        };
        func.emit(code, ops);
        expected.push(format!("    {line}"));
    }
    expected.push("end".to_string());
    module.add_function(func);

    let text = run(&module).0.unwrap();
    assert_eq!(text, expected.join("\n") + "\n");
}

#[test]
fn test_branch_lines_end_with_terminator_and_goto_does_not() {
    let mut func = Function::new("loop", vec![i64_var("n")]);
    let n = Operand::Reg(0);
    let top = func.new_label();
    func.place_label(top);
    func.emit(Opcode::Sub, vec![n, n, Operand::Int(1)]);
    func.emit(Opcode::BGtS, vec![Operand::Label(top), n, Operand::Int(0)]);
    func.emit(Opcode::Bt, vec![Operand::Label(top), n]);
    func.emit(Opcode::Jmp, vec![Operand::Label(top)]);
    let mut module = Module::new("loop");
    module.add_function(func);

    let text = run(&module).0.unwrap();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with("if ") {
            assert!(line.ends_with(" end"), "{line}");
        }
        if line.starts_with("goto ") {
            assert_eq!(line, "goto l0");
        }
    }
    assert!(text.contains("    if n > 0 then goto l0 end\n"));
}

#[test]
fn test_unknown_label_is_internal_error() {
    let mut func = Function::new("broken", vec![]);
    func.emit(Opcode::Jmp, vec![Operand::Label(3)]);
    let mut module = Module::new("broken");
    module.add_function(func);

    let (result, reporter) = run(&module);
    assert!(matches!(result, Err(TranslateError::Internal { .. })));
    assert_eq!(reporter.internal_count(), 1);
}

#[test]
fn test_early_return_is_wrapped() {
    let mut func = Function::new("abs", vec![i64_var("x")]);
    let x = Operand::Reg(0);
    let neg = func.new_label();
    func.emit(Opcode::BLt, vec![Operand::Label(neg), x, Operand::Int(0)]);
    func.emit(Opcode::Ret, vec![x]);
    func.place_label(neg);
    func.emit(Opcode::Neg, vec![x, x]);
    func.emit(Opcode::Ret, vec![x]);
    let mut module = Module::new("abs");
    module.add_function(func);

    let text = run(&module).0.unwrap();
    assert_eq!(
        text,
        "function abs(x)\n\
         \x20   if x < 0 then goto l0 end\n\
         \x20   do return x end\n\
         ::l0::\n\
         \x20   x = 0 - x\n\
         \x20   return x\n\
         end\n"
    );
}

#[test]
fn test_custom_indent() {
    let mut module = Module::new("add");
    module.add_function(add_function());

    let mut reporter = ErrorReporter::new();
    let options = TranslateOptions {
        indent: "\t".to_string(),
        ..TranslateOptions::default()
    };
    let text = translate_to_string(&module, &mut reporter, &options).unwrap();
    assert_eq!(text, "function add(a, b)\n\ta = a + b\n\treturn a\nend\n");
}
