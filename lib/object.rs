use core::fmt;

/// A runtime value. Literals are typed by the scanner, so every value is
/// already an integer or a real.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Object {
    Integer(i64),
    Real(f64),
}

impl Object {
    pub fn as_real(self) -> f64 {
        match self {
            Object::Integer(value) => value as f64,
            Object::Real(value) => value,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Real(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Object::Real(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let tests = vec![
            (Object::Integer(12), "12"),
            (Object::Integer(-3), "-3"),
            (Object::Real(22.0), "22.0"),
            (Object::Real(3.5), "3.5"),
            (Object::Real(-0.25), "-0.25"),
        ];

        for (object, expected) in tests {
            assert_eq!(object.to_string(), expected);
        }
    }

    #[test]
    fn as_real() {
        assert_eq!(Object::Integer(7).as_real(), 7.0);
        assert_eq!(Object::Real(-0.5).as_real(), -0.5);
    }
}
