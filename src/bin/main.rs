use std::process;
use std::str::FromStr;

use clap::Parser;
use log::info;

use rationals::{InvalidArgument, RationalBig};

/// Exact arithmetic on fractions like `117/1098` or `-5`.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Arguments {
    /// Left operand, printed in canonical form when no operator is given.
    #[clap(value_parser, allow_hyphen_values = true)]
    left: RationalBig,
    /// One of `+`, `-`, `*`, `/` or `cmp`.
    #[clap(value_parser, requires = "right")]
    operator: Option<Operator>,
    /// Right operand.
    #[clap(value_parser, allow_hyphen_values = true)]
    right: Option<RationalBig>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "cmp" => Ok(Operator::Compare),
            other => Err(format!("Unknown operator \"{}\", expected one of + - * / cmp", other)),
        }
    }
}

fn evaluate(
    left: RationalBig,
    operator: Operator,
    right: RationalBig,
) -> Result<String, InvalidArgument> {
    info!("Evaluating {} {:?} {}", left, operator, right);

    let result = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left.try_div(&right)?,
        Operator::Compare => return Ok((left.cmp(&right) as i8).to_string()),
    };

    Ok(result.to_string())
}

fn main() {
    env_logger::init();

    let Arguments { left, operator, right } = Arguments::parse();

    let output = match (operator, right) {
        (Some(operator), Some(right)) => evaluate(left, operator, right),
        _ => Ok(left.to_string()),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod test {
    use rationals::error::Kind;
    use rationals::RationalBig;

    use crate::{evaluate, Operator};

    fn r(text: &str) -> RationalBig {
        text.parse().unwrap()
    }

    #[test]
    fn operators() {
        assert_eq!(evaluate(r("1/2"), Operator::Add, r("1/3")).unwrap(), "5/6");
        assert_eq!(evaluate(r("1/2"), Operator::Subtract, r("1/3")).unwrap(), "1/6");
        assert_eq!(evaluate(r("1/2"), Operator::Multiply, r("1/3")).unwrap(), "1/6");
        assert_eq!(evaluate(r("1/2"), Operator::Divide, r("1/3")).unwrap(), "3/2");
        assert_eq!(evaluate(r("1/2"), Operator::Compare, r("2/3")).unwrap(), "-1");
        assert_eq!(evaluate(r("2/4"), Operator::Compare, r("1/2")).unwrap(), "0");
        assert_eq!(
            evaluate(
                r("20325830850349869048604856908"),
                Operator::Compare,
                r("-9192901948302584358938698"),
            ).unwrap(),
            "1",
        );
    }

    #[test]
    fn divide_by_zero() {
        let error = evaluate(r("1/2"), Operator::Divide, r("0")).unwrap_err();
        assert_eq!(error.kind(), Kind::ZeroDenominator);
    }

    #[test]
    fn parse_operator() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("cmp".parse::<Operator>(), Ok(Operator::Compare));
        assert!("%".parse::<Operator>().is_err());
    }
}
