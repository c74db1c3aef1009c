use std::fmt;

/// The position of a visited definition inside a schema.
///
/// A path is printed as a schema coordinate, e.g. `Query.user(id:)`, `@include(if:)`, or
/// `Color.RED`, which is also how definitions are referred to in validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path<'a> {
    pub segments: Vec<PathSegment<'a>>,
}

impl<'a> Path<'a> {
    pub fn push(&mut self, segment: PathSegment<'a>) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment<'a>> {
        self.segments.pop()
    }

    /// Returns the name of the named type this path is inside of, if any.
    pub fn type_name(&self) -> Option<&'a str> {
        self.segments.iter().find_map(|segment| match segment {
            PathSegment::Type(name) => Some(*name),
            _ => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment<'a> {
    Type(&'a str),
    Directive(&'a str),
    Field(&'a str),
    Argument(&'a str),
    InputField(&'a str),
    EnumValue(&'a str),
}

impl<'a> fmt::Display for PathSegment<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Type(name) => write!(f, "{name}"),
            PathSegment::Directive(name) => write!(f, "@{name}"),
            PathSegment::Field(name)
            | PathSegment::InputField(name)
            | PathSegment::EnumValue(name) => write!(f, ".{name}"),
            PathSegment::Argument(name) => write!(f, "({name}:)"),
        }
    }
}

impl<'a> fmt::Display for Path<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments.iter() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_coordinates() {
        let mut path = Path::default();
        path.push(PathSegment::Type("Query"));
        assert_eq!(path.to_string(), "Query");
        path.push(PathSegment::Field("user"));
        path.push(PathSegment::Argument("id"));
        assert_eq!(path.to_string(), "Query.user(id:)");
        assert_eq!(path.type_name(), Some("Query"));

        let mut path = Path::default();
        path.push(PathSegment::Directive("include"));
        path.push(PathSegment::Argument("if"));
        assert_eq!(path.to_string(), "@include(if:)");
        assert_eq!(path.type_name(), None);
        assert_eq!(path.pop(), Some(PathSegment::Argument("if")));
        assert_eq!(path.to_string(), "@include");
    }
}
