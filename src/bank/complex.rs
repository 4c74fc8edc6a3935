//! The complex-variables catalog.
//!
//! Fifteen questions covering roots, regions of the plane, inverse
//! function identities, limits, continuity, differentiability, the
//! Cauchy-Riemann equations, and harmonic conjugates.

use crate::bank::{bad_selector, ParamTrace, Question};
use crate::error::Result;
use crate::polar::rectangular_form;

/// Builds the fifteen questions for one student.
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
        Question::new(
            "Q1",
            q1(
                p.value("Q1_n", 5, 7)?,
                p.value("Q1_r", 2, 3)?,
                p.value("Q1_arg", 0, 15)?,
            )?,
        ),
        Question::new(
            "Q2",
            q2(
                p.value("Q2_n", 1, 5)?,
                p.value("Q2_a", 4, 9)?,
                p.value("Q2_b", 1, 7)?,
            )?,
        ),
        Question::new(
            "Q3",
            q3(
                p.value("Q3_n", 1, 20)?,
                p.value("Q3_a", 4, 9)?,
                p.value("Q3_b", 1, 7)?,
            )?,
        ),
        Question::new(
            "Q4",
            q4(
                p.value("Q4_a", 2, 9)?,
                p.value("Q4_r", 2, 9)?,
                p.value("Q4_arg", 0, 15)?,
            )?,
        ),
        Question::new("Q5", q5(p.value("Q5_n", 1, 12)?)?),
        Question::new(
            "Q6",
            q6(
                p.value("Q6_n", 1, 24)?,
                p.value("Q6_a", 2, 9)?,
                p.value("Q6_b", 2, 9)?,
            )?,
        ),
        Question::new("Q7", q7(p.value("Q7_n", 1, 2)?)?),
        Question::new("Q8", q8(p.value("Q8_n", 1, 4)?, p.value("Q8_a", 2, 9)?)?),
        Question::new("Q9", q9(p.value("Q9_a", 2, 9)?, p.value("Q9_b", 2, 9)?)),
        Question::new(
            "Q10",
            q10(
                p.value("Q10_n", 1, 3)?,
                p.value("Q10_a", 2, 9)?,
                p.value("Q10_b", 2, 9)?,
                p.value("Q10_c", 2, 9)?,
                p.value("Q10_d", 2, 9)?,
            )?,
        ),
        Question::new(
            "Q11",
            q11(
                p.value("Q11_n", 1, 2)?,
                p.value("Q11_a", 2, 9)?,
                p.value("Q11_b", 2, 9)?,
                p.value("Q11_c", 2, 9)?,
            )?,
        ),
        Question::new(
            "Q12",
            q12(
                p.value("Q12_n", 1, 2)?,
                p.value("Q12_a", 2, 9)?,
                p.value("Q12_b", 2, 9)?,
                p.value("Q12_c", 2, 9)?,
                p.value("Q12_d", 2, 9)?,
            )?,
        ),
        Question::new(
            "Q13",
            q13(
                p.value("Q13_n", 1, 2)?,
                p.value("Q13_a", 2, 9)?,
                p.value("Q13_b", 2, 9)?,
                p.value("Q13_c", 2, 9)?,
            )?,
        ),
        Question::new(
            "Q14",
            q14(
                p.value("Q14_n", 1, 4)?,
                p.value("Q14_a", 2, 9)?,
                p.value("Q14_b", 2, 9)?,
                p.value("Q14_c", 2, 9)?,
                p.value("Q14_d", 2, 9)?,
                p.value("Q14_e", 2, 9)?,
                p.value("Q14_f", 2, 9)?,
            )?,
        ),
        Question::new(
            "Q15",
            q15(
                p.value("Q15_n", 1, 2)?,
                p.value("Q15_a", 2, 9)?,
                p.value("Q15_b", 2, 9)?,
            )?,
        ),
    ])
}

/// Roots of `z^n` for a right-hand side given in rectangular form.
fn q1(n: i64, modulus: i64, angle: i64) -> Result<String> {
    let rhs = rectangular_form(modulus.pow(n as u32), angle)?;
    Ok(format!(
        "Find all possible values of $z$ satisfying $$z^{{{n}}} = {rhs}.$$ Locate them on the complex plane. Show that they lie on a circle, and determine its radius. Also, find the angular distance between two adjacent roots."
    ))
}

/// Loci described by modulus equalities.
fn q2(n: i64, a: i64, b: i64) -> Result<String> {
    let body = match n {
        1 => format!(r"\left|\frac{{z+{a}i}}{{z-{a}i}}\right|={b}"),
        2 => format!(r"|z+{a}|+|z-{a}|={}", 2 * a + b),
        3 => format!(r"|z+{a}i|+|z-{a}i|={}", 2 * a + b),
        4 => format!(r"|z-{a}|-|z+{a}|={}", 2 * a - b),
        5 => format!(r"|z-{a}i|-|z+{a}i|={}", 2 * a - b),
        _ => return Err(bad_selector("Q2", n, 5)),
    };
    Ok(format!(
        r"Describe the equation $\displaystyle {body}$ graphically on the complex plane."
    ))
}

/// Regions described by modulus inequalities. Twenty variants: five locus
/// families crossed with the four order relations.
fn q3(n: i64, a: i64, b: i64) -> Result<String> {
    if !(1..=20).contains(&n) {
        return Err(bad_selector("Q3", n, 20));
    }
    let relation = ["<", ">", r"\le", r"\ge"][((n - 1) % 4) as usize];
    let body = match (n - 1) / 4 {
        0 => format!(r"\left|\frac{{z+{a}i}}{{z-{a}i}}\right| {relation} {b}"),
        1 => format!(r"|z+{a}|+|z-{a}| {relation} {}", 2 * a + b),
        2 => format!(r"|z+{a}i|+|z-{a}i| {relation} {}", 2 * a + b),
        3 => format!(r"|z-{a}|-|z+{a}| {relation} {}", 2 * a - b),
        _ => format!(r"|z-{a}i|-|z+{a}i| {relation} {}", 2 * a - b),
    };
    Ok(format!(
        r"Describe the region $\displaystyle {body}$ graphically on the complex plane."
    ))
}

/// Exponential equation with a rectangular-form target.
fn q4(a: i64, modulus: i64, angle: i64) -> Result<String> {
    let target = rectangular_form(modulus, angle)?;
    Ok(format!(
        r"Solve the equation $$e^{{{a}z}}={target}$$ for $z$ and express $z$ as $x+iy$ where $x,y\in\mathbb{{R}}$."
    ))
}

const INVERSE_IDENTITIES: [&str; 12] = [
    r"\sin^{-1} z = \frac{1}{i}\,\ln\!\big( iz + \sqrt{1 - z^2} \big)",
    r"\cos^{-1} z = \frac{1}{i}\,\ln\!\big( z + \sqrt{z^2 - 1} \big)",
    r"\tan^{-1} z = \frac{1}{2i}\,\ln\!\left( \frac{1 + iz}{1 - iz} \right)",
    r"\cosec^{-1} z = \frac{1}{i}\,\ln\!\left( \frac{i + \sqrt{z^2 - 1}}{z} \right)",
    r"\sec^{-1} z = \frac{1}{i}\,\ln\!\left( \frac{1 + \sqrt{1 - z^2}}{z} \right)",
    r"\cot^{-1} z = \frac{1}{2i}\,\ln\!\left( \frac{z + i}{z - i} \right)",
    r"\sinh^{-1} z = \ln\!\big( z + \sqrt{z^2 + 1} \big)",
    r"\cosh^{-1} z = \ln\!\big( z + \sqrt{z^2 - 1} \big)",
    r"\tanh^{-1} z = \frac{1}{2}\,\ln\!\left( \frac{1 + z}{1 - z} \right)",
    r"\cosech^{-1} z = \ln\!\left( \frac{1 + \sqrt{z^2 + 1}}{z} \right)",
    r"\sech^{-1} z = \ln\!\left( \frac{1 + \sqrt{1 - z^2}}{z} \right)",
    r"\coth^{-1} z = \frac{1}{2}\,\ln\!\left( \frac{z + 1}{z - 1} \right)",
];

fn q5(n: i64) -> Result<String> {
    if !(1..=12).contains(&n) {
        return Err(bad_selector("Q5", n, 12));
    }
    let identity = INVERSE_IDENTITIES[(n - 1) as usize];
    Ok(format!("Prove that $${identity}.$$"))
}

const SOLVE_FUNCTIONS: [&str; 12] = [
    r"\sin", r"\cos", r"\tan", r"\cosec", r"\sec", r"\cot", r"\sinh", r"\cosh", r"\tanh",
    r"\cosech", r"\sech", r"\coth",
];

/// Trigonometric and hyperbolic equations. Odd selectors take `a+bi` on
/// the right-hand side, even selectors `a-bi`.
fn q6(n: i64, a: i64, b: i64) -> Result<String> {
    if !(1..=24).contains(&n) {
        return Err(bad_selector("Q6", n, 24));
    }
    let function = SOLVE_FUNCTIONS[((n - 1) / 2) as usize];
    let rhs = if (n - 1) % 2 == 0 {
        format!("{a}+{b}i")
    } else {
        format!("{a}-{b}i")
    };
    Ok(format!(r"Solve for $z$ where \[{function} z = {rhs}.\]"))
}

const PATH_LIMITS: [&str; 2] = [
    r"Using the definition of a limit, show that $\displaystyle \lim_{z \to 0} \frac{\operatorname{Re}(z^2)}{|z|^2}$ does not exist.",
    r"Using the definition of a limit, show that $\displaystyle \lim_{z \to 0} \frac{\operatorname{Im}(z^2)}{|z|^2}$ does not exist.",
];

fn q7(n: i64) -> Result<String> {
    if !(1..=2).contains(&n) {
        return Err(bad_selector("Q7", n, 2));
    }
    Ok(PATH_LIMITS[(n - 1) as usize].to_string())
}

/// Indeterminate powers handled by L'Hopital's rule.
fn q8(n: i64, a: i64) -> Result<String> {
    let base = match n {
        1 => r"\frac{\sin z}{z}",
        2 => r"\frac{\tan z}{z}",
        3 => r"\cos z",
        4 => r"\sec z",
        _ => return Err(bad_selector("Q8", n, 4)),
    };
    Ok(format!(
        r"Using L’Hôpital’s rule, evaluate $$ \lim_{{z \to 0}} \left( {base} \right)^{{\frac{{{a} \sin(z)}}{{z - \sin z}}}}.$$"
    ))
}

fn q9(a: i64, b: i64) -> String {
    format!(
        r"Consider the function \[f(z) = \frac{{\tan {a}z}}{{{b}z}}.\]Is \( f(z) \) continuous at \( z = 0 \)? If not, redefine \( f \) at \( z = 0 \) so that \( f(z) \) becomes continuous. Also, find all points of discontinuity of \(f(z)\)."
    )
}

/// Derivatives from the difference quotient.
fn q10(n: i64, a: i64, b: i64, c: i64, d: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Using the definition, find the derivative of $ \displaystyle f(z) = \frac{{{a}z-{b}}}{{{c}z+{d}i}} \quad \text{{at}} \quad z = i$."
        ),
        2 => format!(
            r"Using the definition, find the derivative of $ \displaystyle f(z) = \frac{{{a}}}{{{b}z + {c}}} \quad \text{{at}} \quad z = z_0$."
        ),
        3 => format!(
            r"Using the definition, find the derivative of $ \displaystyle f(z) = \frac{{{a}}}{{z^2}} \quad \text{{at}} \quad z = {b}+{c}i$."
        ),
        _ => return Err(bad_selector("Q10", n, 3)),
    })
}

fn q11(n: i64, a: i64, b: i64, c: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Using the definition, show that $$f(z)={a}z^3 + {b}z - {c}$$ is differentiable at all points. Also find the derivative."
        ),
        2 => format!(
            r"Using the definition, show that $$f(z)={a}z\bar{{z}} - {b}z + {c}\bar{{z}}$$ is not differentiable at any point."
        ),
        _ => return Err(bad_selector("Q11", n, 2)),
    })
}

fn q12(n: i64, a: i64, b: i64, c: i64, d: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Consider the function \[ f(z) = {a} \sin({b}z) - {c} \cosh({d}z).\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        ),
        2 => format!(
            r"Consider the function \[ f(z) = {a} \sinh({b}z) - {c} \cos({d}z).\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        ),
        _ => return Err(bad_selector("Q12", n, 2)),
    })
}

fn q13(n: i64, a: i64, b: i64, c: i64) -> Result<String> {
    Ok(match n {
        1 => format!(
            r"Consider the function \[ f(z) = {a}|z|^2 + {b}z - {c}\bar{{z}}.\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        ),
        2 => format!(
            r"Consider the function \[ f(z) = {a}ze^{{-{b}z}}.\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        ),
        _ => return Err(bad_selector("Q13", n, 2)),
    })
}

/// Shared frame for the harmonic conjugate questions. `given` is the
/// named function in the statement, `conjugate` the one to find.
fn harmonic_frame(given: &str, conjugate: &str, body: &str) -> String {
    format!(
        r"Show that the function \[ {given}(x,y) = {body} \] is harmonic. Find the harmonic conjugate \textbf{{${conjugate}$}} of \textbf{{${given}$}} such that \textbf{{$U+Vi$}} becomes analytic."
    )
}

/// Harmonic functions with a cubic tail. The `x^2y` coefficient is three
/// times the `y^3` coefficient so the Laplacian cancels exactly.
fn q14(n: i64, a: i64, b: i64, c: i64, d: i64, e: i64, f: i64) -> Result<String> {
    let e3 = 3 * e;
    let c3 = 3 * c;
    let exponential = format!(
        r"{a} e^{{-{b}x}}\cos({b}y)\;-\; {c} e^{{{d}y}}\sin({d}x) \;+\; {e3}\,x^2y \;-\; {f}x^2 \;-\; {e}y^3 \;+\; {f}y^2"
    );
    let trigonometric = format!(
        r"{a} \sin({b}x)\cosh({b}y) \;+\; {c3}\,x^2y \;-\; {d}x^2 \;-\; {c}y^3 \;+\; {d}y^2"
    );
    Ok(match n {
        1 => harmonic_frame("U", "V", &exponential),
        2 => harmonic_frame("V", "U", &exponential),
        3 => harmonic_frame("U", "V", &trigonometric),
        4 => harmonic_frame("V", "U", &trigonometric),
        _ => return Err(bad_selector("Q14", n, 4)),
    })
}

fn q15(n: i64, a: i64, b: i64) -> Result<String> {
    let body = format!(
        r"{a}\, x e^{{-{b}x}}\cos({b}y) \;+\; {a}\, y e^{{-{b}x}}\sin({b}y)"
    );
    Ok(match n {
        1 => harmonic_frame("U", "V", &body),
        2 => harmonic_frame("V", "U", &body),
        _ => return Err(bad_selector("Q15", n, 2)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MillError;

    #[test]
    fn q1_embeds_the_power_and_rectangular_target() {
        assert_eq!(
            q1(6, 2, 4).unwrap(),
            "Find all possible values of $z$ satisfying $$z^{6} = 64 i.$$ Locate them on the complex plane. Show that they lie on a circle, and determine its radius. Also, find the angular distance between two adjacent roots."
        );
    }

    #[test]
    fn q2_evaluates_the_sum_bound() {
        assert_eq!(
            q2(1, 5, 3).unwrap(),
            r"Describe the equation $\displaystyle \left|\frac{z+5i}{z-5i}\right|=3$ graphically on the complex plane."
        );
        assert_eq!(
            q2(2, 5, 3).unwrap(),
            r"Describe the equation $\displaystyle |z+5|+|z-5|=13$ graphically on the complex plane."
        );
        assert_eq!(
            q2(4, 4, 7).unwrap(),
            r"Describe the equation $\displaystyle |z-4|-|z+4|=1$ graphically on the complex plane."
        );
    }

    #[test]
    fn q3_crosses_locus_families_with_relations() {
        assert_eq!(
            q3(1, 4, 1).unwrap(),
            r"Describe the region $\displaystyle \left|\frac{z+4i}{z-4i}\right| < 1$ graphically on the complex plane."
        );
        assert_eq!(
            q3(8, 4, 1).unwrap(),
            r"Describe the region $\displaystyle |z+4|+|z-4| \ge 9$ graphically on the complex plane."
        );
        assert_eq!(
            q3(20, 5, 2).unwrap(),
            r"Describe the region $\displaystyle |z-5i|-|z+5i| \ge 8$ graphically on the complex plane."
        );
    }

    #[test]
    fn q4_solves_against_an_exact_target() {
        assert_eq!(
            q4(5, 2, 1).unwrap(),
            r"Solve the equation $$e^{5z}=\sqrt{3} + i$$ for $z$ and express $z$ as $x+iy$ where $x,y\in\mathbb{R}$."
        );
    }

    #[test]
    fn q5_quotes_the_identity_verbatim() {
        assert_eq!(
            q5(1).unwrap(),
            r"Prove that $$\sin^{-1} z = \frac{1}{i}\,\ln\!\big( iz + \sqrt{1 - z^2} \big).$$"
        );
        assert_eq!(
            q5(12).unwrap(),
            r"Prove that $$\coth^{-1} z = \frac{1}{2}\,\ln\!\left( \frac{z + 1}{z - 1} \right).$$"
        );
    }

    #[test]
    fn q6_pairs_each_function_with_both_signs() {
        assert_eq!(
            q6(5, 4, 7).unwrap(),
            r"Solve for $z$ where \[\tan z = 4+7i.\]"
        );
        assert_eq!(
            q6(6, 4, 7).unwrap(),
            r"Solve for $z$ where \[\tan z = 4-7i.\]"
        );
        assert_eq!(
            q6(24, 2, 9).unwrap(),
            r"Solve for $z$ where \[\coth z = 2-9i.\]"
        );
    }

    #[test]
    fn q7_alternates_real_and_imaginary_parts() {
        assert!(q7(1).unwrap().contains(r"\operatorname{Re}(z^2)"));
        assert!(q7(2).unwrap().contains(r"\operatorname{Im}(z^2)"));
    }

    #[test]
    fn q8_swaps_the_base_expression() {
        assert_eq!(
            q8(3, 4).unwrap(),
            r"Using L’Hôpital’s rule, evaluate $$ \lim_{z \to 0} \left( \cos z \right)^{\frac{4 \sin(z)}{z - \sin z}}.$$"
        );
        assert!(q8(1, 2).unwrap().contains(r"\frac{\sin z}{z}"));
    }

    #[test]
    fn q9_fills_both_coefficients() {
        assert_eq!(
            q9(2, 3),
            r"Consider the function \[f(z) = \frac{\tan 2z}{3z}.\]Is \( f(z) \) continuous at \( z = 0 \)? If not, redefine \( f \) at \( z = 0 \) so that \( f(z) \) becomes continuous. Also, find all points of discontinuity of \(f(z)\)."
        );
    }

    #[test]
    fn q10_varies_the_evaluation_point() {
        assert_eq!(
            q10(1, 2, 3, 4, 5).unwrap(),
            r"Using the definition, find the derivative of $ \displaystyle f(z) = \frac{2z-3}{4z+5i} \quad \text{at} \quad z = i$."
        );
        assert_eq!(
            q10(3, 7, 2, 3, 9).unwrap(),
            r"Using the definition, find the derivative of $ \displaystyle f(z) = \frac{7}{z^2} \quad \text{at} \quad z = 2+3i$."
        );
    }

    #[test]
    fn q11_distinguishes_differentiable_from_not() {
        assert_eq!(
            q11(1, 2, 3, 4).unwrap(),
            r"Using the definition, show that $$f(z)=2z^3 + 3z - 4$$ is differentiable at all points. Also find the derivative."
        );
        assert_eq!(
            q11(2, 2, 3, 4).unwrap(),
            r"Using the definition, show that $$f(z)=2z\bar{z} - 3z + 4\bar{z}$$ is not differentiable at any point."
        );
    }

    #[test]
    fn q12_renders_both_function_shapes() {
        assert_eq!(
            q12(1, 2, 3, 4, 5).unwrap(),
            r"Consider the function \[ f(z) = 2 \sin(3z) - 4 \cosh(5z).\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        );
    }

    #[test]
    fn q13_second_variant_ignores_the_third_coefficient() {
        assert_eq!(
            q13(2, 5, 2, 9).unwrap(),
            r"Consider the function \[ f(z) = 5ze^{-2z}.\] Using the Cauchy–Riemann equations, determine whether the function is analytic."
        );
    }

    #[test]
    fn q14_triples_the_cubic_coefficient() {
        let text = q14(1, 2, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            text,
            r"Show that the function \[ U(x,y) = 2 e^{-3x}\cos(3y)\;-\; 4 e^{5y}\sin(5x) \;+\; 18\,x^2y \;-\; 7x^2 \;-\; 6y^3 \;+\; 7y^2 \] is harmonic. Find the harmonic conjugate \textbf{$V$} of \textbf{$U$} such that \textbf{$U+Vi$} becomes analytic."
        );
        let trig = q14(3, 2, 3, 4, 5, 6, 7).unwrap();
        assert!(trig.contains(r"12\,x^2y"));
        assert!(trig.starts_with(r"Show that the function \[ U(x,y) = 2 \sin(3x)\cosh(3y)"));
    }

    #[test]
    fn q15_swaps_the_named_function() {
        let text = q15(2, 4, 3).unwrap();
        assert!(text.starts_with(r"Show that the function \[ V(x,y) = 4\, x e^{-3x}\cos(3y)"));
        assert!(text.contains(r"harmonic conjugate \textbf{$U$} of \textbf{$V$}"));
    }

    #[test]
    fn selectors_outside_the_catalog_are_rejected() {
        assert!(matches!(
            q2(6, 4, 1).unwrap_err(),
            MillError::InvalidVariantSelector {
                question: "Q2",
                selector: 6,
                max: 5,
            }
        ));
        assert!(matches!(
            q3(0, 4, 1).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q3", .. }
        ));
        assert!(matches!(
            q5(13).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q5", .. }
        ));
        assert!(matches!(
            q8(5, 2).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q8", max: 4, .. }
        ));
        assert!(matches!(
            q14(5, 2, 2, 2, 2, 2, 2).unwrap_err(),
            MillError::InvalidVariantSelector { question: "Q14", .. }
        ));
    }

    #[test]
    fn every_derived_parameter_is_labeled() {
        let values = parameter_values("221-15-4023").unwrap();
        assert_eq!(values.len(), 49);
        assert_eq!(values[0].0, "Q1_n");
        assert!((5..=7).contains(&values[0].1));
        assert_eq!(values[48].0, "Q15_b");
        let labels: std::collections::BTreeSet<_> =
            values.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.len(), 49, "labels must be unique");
    }

    #[test]
    fn full_booklet_builds_for_any_identifier() {
        for identifier in ["12345", "221-15-4023", "0"] {
            let questions = questions(identifier).unwrap();
            assert_eq!(questions.len(), 15);
            for question in &questions {
                assert!(!question.text.is_empty());
                assert!(!question.text.contains('@'), "unfilled value in {}", question.key);
            }
        }
    }
}
