use arraykit::{Realm, Value};
use std::{env, process::ExitCode};

const USAGE: &str = "Usage: arraykit <method> <json-array> [args...]";

/// Invoke a single array method from the command line. The receiver and each
/// argument are JSON, with the extra literals `undefined`, `NaN`, `Infinity`
/// and `-Infinity` accepted as arguments. Prints the return value, then the
/// receiver as it stands after the call.
fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(method), Some(receiver)) = (args.next(), args.next()) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    match run(&method, &receiver, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    method: &str,
    receiver: &str,
    args: impl Iterator<Item = String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let receiver: Value = serde_json::from_str(receiver)?;
    let args = args
        .map(|arg| parse_arg(&arg))
        .collect::<Result<Vec<_>, _>>()?;

    let realm = Realm::new();
    let output = realm.invoke(&receiver, method, &args)?;
    println!("{}", to_json(&output)?);
    println!("{}", to_json(&receiver)?);
    Ok(())
}

fn parse_arg(arg: &str) -> serde_json::Result<Value> {
    match arg {
        "undefined" => Ok(Value::Undefined),
        "NaN" => Ok(f64::NAN.into()),
        "Infinity" => Ok(f64::INFINITY.into()),
        "-Infinity" => Ok((-f64::INFINITY).into()),
        _ => serde_json::from_str(arg),
    }
}

/// JSON has no `undefined`, so print it bare
fn to_json(value: &Value) -> serde_json::Result<String> {
    match value {
        Value::Undefined => Ok("undefined".to_owned()),
        _ => serde_json::to_string(value),
    }
}
