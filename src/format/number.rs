use crate::matrix::Element;

// values this close to an integer display without a decimal part
const INT_SNAP: f64 = 1e-9;

pub fn pretty_num<T: Element>(x: T) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let nearest = x.round();
    if (x - nearest).abs() < T::from(INT_SNAP).unwrap() {
        if nearest == T::zero() {
            return "0".into(); // covers -0.0 from divisions by a negative pivot
        }
        return format!("{:.0}", nearest);
    }

    let fixed = format!("{:.6}", x);
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    if fixed == "-0" {
        return "0".into();
    }
    fixed.to_string()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
