//! Indentation units.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation, the TypeScript default.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Append one indent level to `buf`.
    pub fn push_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(width) => {
                buf.extend(std::iter::repeat_n(' ', usize::from(*width)));
            }
            Self::Tab => buf.push('\t'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(indent: Indent) -> String {
        let mut buf = String::new();
        indent.push_to(&mut buf);
        buf
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(unit(Indent::TYPESCRIPT), "  ");
        assert_eq!(unit(Indent::Spaces(3)), "   ");
        assert_eq!(unit(Indent::Spaces(0)), "");
        assert_eq!(unit(Indent::Tab), "\t");
    }
}
