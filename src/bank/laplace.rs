//! The Laplace-transform catalog.
//!
//! Ten questions, from the defining integral up to systems of
//! differential equations.

use crate::bank::{bad_selector, ParamTrace, Question};
use crate::error::Result;

/// Builds the ten questions for one student.
pub fn questions(identifier: &str) -> Result<Vec<Question>> {
    let mut params = ParamTrace::new(identifier);
    build(&mut params)
}

/// Derived parameter labels and values, in derivation order.
pub fn parameter_values(identifier: &str) -> Result<Vec<(&'static str, i64)>> {
    let mut params = ParamTrace::new(identifier);
    build(&mut params)?;
    Ok(params.into_values())
}

fn build(p: &mut ParamTrace<'_>) -> Result<Vec<Question>> {
    Ok(vec![
        Question::new("Q1", q1(p.value("Q1_n", 1, 4)?)?),
        Question::new(
            "Q2",
            q2(
                p.value("Q2_n", 1, 2)?,
                p.value("Q2_a", 2, 5)?,
                p.value("Q2_b", 2, 5)?,
            )?,
        ),
        Question::new(
            "Q3",
            q3(
                p.value("Q3_n", 1, 4)?,
                p.value("Q3_a", 2, 4)?,
                p.value("Q3_b", 2, 5)?,
                p.value("Q3_c", 2, 5)?,
            )?,
        ),
        Question::new("Q4", q4()),
        Question::new("Q5", q5(p.value("Q5_n", 1, 2)?)?),
        Question::new("Q6", q6(p.value("Q6_a", 2, 5)?, p.value("Q6_b", 2, 5)?)),
        Question::new("Q7", q7(p.value("Q7_n", 1, 2)?)?),
        Question::new("Q8", q8(p.value("Q8_n", 1, 2)?)?),
        Question::new("Q9", q9(p.value("Q9_n", 1, 2)?)?),
        Question::new("Q10", q10(p.value("Q10_n", 1, 3)?)?),
    ])
}

const DEFINITION_TARGETS: [&str; 4] = [
    r"\mathcal{L}\{\sin(at)\}=\frac{a}{s^{2}+a^2}",
    r"\mathcal{L}\{\cos(at)\}=\frac{s}{s^{2}+a^2}",
    r"\mathcal{L}\{\sinh(at)\}=\frac{a}{s^{2}-a^2}",
    r"\mathcal{L}\{\cosh(at)\}=\frac{s}{s^{2}-a^2}",
];

/// Standard transforms proved from the defining integral.
fn q1(n: i64) -> Result<String> {
    if !(1..=4).contains(&n) {
        return Err(bad_selector("Q1", n, 4));
    }
    let target = DEFINITION_TARGETS[(n - 1) as usize];
    Ok(format!(
        r"We know that the Laplace transform of a function $f(t)$ is defined by \[ \mathcal{{L}}\{{f(t)\}}=\int_{{0}}^{{\infty}} e^{{-st}} f(t)\,dt\] Using this definition, show that \[ {target}. \]"
    ))
}

fn q2(n: i64, a: i64, b: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Using definition, find the Laplace transform of the piecewise function \[ f(t)= \begin{{cases}} {a} \sin {b}t, & 0\le t<\pi,\\[4pt] 0, & t\ge \pi. \end{{cases}} \]"
        ),
        2 => format!(
            r"Using definition, find the Laplace transform of the piecewise function \[ f(t)= \begin{{cases}} 0, & 0\le t<\pi,\\[4pt] {a} \cos {b}t, & t\ge \pi. \end{{cases}} \]"
        ),
        _ => return Err(bad_selector("Q2", n, 2)),
    })
}

/// First translation theorem with a product of trigonometric factors.
fn q3(n: i64, a: i64, b: i64, c: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{{-{a}t}} \sin({b}t) \sin({c}t) \]"
        ),
        2 => format!(
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{{{a}t}} \cos({b}t) \cos({c}t) \]"
        ),
        3 => format!(
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{{-{a}t}} \sin({b}t) \cos({c}t) \]"
        ),
        4 => format!(
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{{{a}t}} \cos({b}t) \sin({c}t) \]"
        ),
        _ => return Err(bad_selector("Q3", n, 4)),
    })
}

fn q4() -> String {
    r"Solve the Inverse Laplace problem\[\mathcal{L}^{-1}\left\{\frac{s}{s^{2}+2s-3}\right\}\]"
        .to_string()
}

const PARTIAL_FRACTION_TARGETS: [&str; 2] = [
    r"Solve the Inverse Laplace problem\[\mathcal{L}^{-1}\left\{\frac{2s-4}{(s^2+s)(s^2+1)}\right\}\]",
    r"Solve the Inverse Laplace problem\[\mathcal{L}^{-1}\left\{\frac{6s+3}{s^{4}+5s^{2}+4}\right\}\]",
];

fn q5(n: i64) -> Result<String> {
    if !(1..=2).contains(&n) {
        return Err(bad_selector("Q5", n, 2));
    }
    Ok(PARTIAL_FRACTION_TARGETS[(n - 1) as usize].to_string())
}

fn q6(a: i64, b: i64) -> String {
    format!(
        r"Use the Laplace transform to solve the given differential equation \[ y' + y = e^{{-{a}t}}\cos({b}t),\qquad y(0)=0. \]"
    )
}

const THIRD_ORDER_PROBLEMS: [&str; 2] = [
    r"Use the Laplace transform to solve the given differential equation \[ 2y''' + 3y'' - 3y' - 2y = e^{-t},\qquad y(0)=0,\; y'(0)=0,\; y''(0)=1. \]",
    r"Use the Laplace transform to solve the given differential equation \[ y''' + 2y'' - y' - 2y = \sin(3t),\qquad y(0)=0,\; y'(0)=0,\; y''(0)=1. \]",
];

fn q7(n: i64) -> Result<String> {
    if !(1..=2).contains(&n) {
        return Err(bad_selector("Q7", n, 2));
    }
    Ok(THIRD_ORDER_PROBLEMS[(n - 1) as usize].to_string())
}

const SECOND_ORDER_PROBLEMS: [&str; 2] = [
    r"Use the Laplace transform to solve the given differential equation \[ y'' + 9y = \cos 3t,\qquad y(0)=2,\; y'(0)=5. \]",
    r"Use the Laplace transform to solve the given differential equation \[y'' + y = \sin t,\qquad y(0)=1,\; y'(0)=-1.\]",
];

fn q8(n: i64) -> Result<String> {
    if !(1..=2).contains(&n) {
        return Err(bad_selector("Q8", n, 2));
    }
    Ok(SECOND_ORDER_PROBLEMS[(n - 1) as usize].to_string())
}

const RESONANT_PROBLEMS: [&str; 2] = [
    r"Use the Laplace transform to solve the given differential equation \[ y' + y = t\sin t,\qquad y(0)=0. \]",
    r"Use the Laplace transform to solve the given differential equation \[ y' - y = t e^{t}\sin t,\qquad y(0)=0. \]",
];

fn q9(n: i64) -> Result<String> {
    if !(1..=2).contains(&n) {
        return Err(bad_selector("Q9", n, 2));
    }
    Ok(RESONANT_PROBLEMS[(n - 1) as usize].to_string())
}

const SYSTEM_PROBLEMS: [&str; 3] = [
    r"Use the Laplace transform to solve the given system of differential equations \[\begin{aligned}\frac{dx}{dt} &= x - 2y,\\\frac{dy}{dt} &= 5x - y,\end{aligned}\qquad x(0) = -1,\; y(0) = 2.\]",
    r"Use the Laplace transform to solve the given system of differential equations \[ \begin{aligned} \frac{dx}{dt} &= 2y + e^{t},\\ \frac{dy}{dt} &= 8x - t, \end{aligned} \qquad x(0) = 1,\; y(0) = 1. \]",
    r"Use the Laplace transform to solve the given system of differential equations \[ \begin{aligned} 2\frac{dx}{dt} + \frac{dy}{dt} - 2x &= 1,\\ \frac{dx}{dt} + \frac{dy}{dt} - 3x - 3y &= 2, \end{aligned} \qquad x(0)=0,\; y(0)=0. \]",
];

fn q10(n: i64) -> Result<String> {
    if !(1..=3).contains(&n) {
        return Err(bad_selector("Q10", n, 3));
    }
    Ok(SYSTEM_PROBLEMS[(n - 1) as usize].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MillError;

    #[test]
    fn q1_frames_each_target_with_the_definition() {
        assert_eq!(
            q1(1).unwrap(),
            r"We know that the Laplace transform of a function $f(t)$ is defined by \[ \mathcal{L}\{f(t)\}=\int_{0}^{\infty} e^{-st} f(t)\,dt\] Using this definition, show that \[ \mathcal{L}\{\sin(at)\}=\frac{a}{s^{2}+a^2}. \]"
        );
        assert!(q1(4).unwrap().contains(r"\mathcal{L}\{\cosh(at)\}=\frac{s}{s^{2}-a^2}"));
    }

    #[test]
    fn q2_places_the_nonzero_branch_per_variant() {
        assert_eq!(
            q2(1, 3, 4).unwrap(),
            r"Using definition, find the Laplace transform of the piecewise function \[ f(t)= \begin{cases} 3 \sin 4t, & 0\le t<\pi,\\[4pt] 0, & t\ge \pi. \end{cases} \]"
        );
        assert!(q2(2, 3, 4).unwrap().contains(r"0, & 0\le t<\pi,\\[4pt] 3 \cos 4t"));
    }

    #[test]
    fn q3_alternates_the_exponent_sign() {
        assert_eq!(
            q3(1, 2, 3, 4).unwrap(),
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{-2t} \sin(3t) \sin(4t) \]"
        );
        assert_eq!(
            q3(2, 2, 3, 4).unwrap(),
            r"Find the Laplace transform of the piecewise function \[ f(t)= t e^{2t} \cos(3t) \cos(4t) \]"
        );
    }

    #[test]
    fn q4_is_fixed_for_every_student() {
        assert_eq!(
            q4(),
            r"Solve the Inverse Laplace problem\[\mathcal{L}^{-1}\left\{\frac{s}{s^{2}+2s-3}\right\}\]"
        );
    }

    #[test]
    fn q6_fills_both_coefficients() {
        assert_eq!(
            q6(2, 5),
            r"Use the Laplace transform to solve the given differential equation \[ y' + y = e^{-2t}\cos(5t),\qquad y(0)=0. \]"
        );
    }

    #[test]
    fn fixed_problem_catalogs_select_verbatim() {
        assert!(q5(2).unwrap().contains(r"\frac{6s+3}{s^{4}+5s^{2}+4}"));
        assert!(q7(1).unwrap().contains(r"2y''' + 3y'' - 3y' - 2y = e^{-t}"));
        assert!(q8(2).unwrap().contains(r"y'' + y = \sin t"));
        assert!(q9(2).unwrap().contains(r"t e^{t}\sin t"));
        assert!(q10(3).unwrap().contains(r"2\frac{dx}{dt} + \frac{dy}{dt} - 2x &= 1"));
    }

    #[test]
    fn selectors_outside_the_catalog_are_rejected() {
        assert!(matches!(
            q1(5).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q1", max: 4, .. }
        ));
        assert!(matches!(
            q5(0).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q5", .. }
        ));
        assert!(matches!(
            q10(4).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q10", max: 3, .. }
        ));
    }

    #[test]
    fn parameter_labels_are_pinned() {
        let values = parameter_values("12345").unwrap();
        let labels: Vec<_> = values.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Q1_n", "Q2_n", "Q2_a", "Q2_b", "Q3_n", "Q3_a", "Q3_b", "Q3_c", "Q5_n", "Q6_a",
                "Q6_b", "Q7_n", "Q8_n", "Q9_n", "Q10_n"
            ]
        );
    }

    #[test]
    fn full_booklet_builds_for_any_identifier() {
        for identifier in ["12345", "221-15-4023", "0"] {
            let booklet = questions(identifier).unwrap();
            assert_eq!(booklet.len(), 10);
            for question in &booklet {
                assert!(!question.text.is_empty());
            }
        }
    }
}
