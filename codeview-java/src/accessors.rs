//! Getter and setter generation for class fields.

use codeview::{Error, Field, Method, Model, NodeData, NodeId, NodeKind, Result, Type};
use codeview_core::to_pascal_case;

/// Add a getter and a setter method for each field, returning the new
/// method ids in order (`getX`, `setX`, `getY`, ...).
///
/// The methods are model nodes like any other, so the caller attaches them
/// to the class being built:
///
/// ```
/// use codeview::{Class, Field, Model, Type};
/// use codeview_java::accessors;
///
/// let mut model = Model::new();
/// let int = model.add(Type::new("int"));
/// let x = model.add(Field::new("x", int).private());
/// let methods = accessors(&mut model, &[x]).unwrap();
///
/// let class = methods
///     .iter()
///     .fold(Class::new("Point").field(x), |class, m| class.method(*m));
/// assert_eq!(class.methods.len(), 2);
/// ```
pub fn accessors(model: &mut Model, fields: &[NodeId]) -> Result<Vec<NodeId>> {
    let mut methods = Vec::with_capacity(fields.len() * 2);
    let mut void_ty = None;

    for id in fields {
        let field = match model.get(*id).map(|entry| &entry.data) {
            Some(NodeData::Field(field)) => field.clone(),
            Some(other) => {
                return Err(Error::KindMismatch {
                    expected: NodeKind::Field,
                    found: other.kind(),
                    node: *id,
                });
            }
            None => return Err(Error::UnknownNode { node: *id }),
        };
        let suffix = to_pascal_case(&field.name);

        let getter = Method::new(format!("get{}", suffix), field.ty)
            .public()
            .line(format!("return this.{};", field.name));
        methods.push(model.add(getter));

        let void = *void_ty.get_or_insert_with(|| model.add(Type::new("void")));
        let param = model.add(Field::new(field.name.clone(), field.ty));
        let setter = Method::new(format!("set{}", suffix), void)
            .public()
            .param(param)
            .line(format!("this.{0} = {0};", field.name));
        methods.push(model.add(setter));
    }

    Ok(methods)
}

#[cfg(test)]
mod tests {
    use codeview::{Class, Generator, Package};

    use super::*;
    use crate::Java8;

    #[test]
    fn test_accessors_render() {
        let mut model = Model::new();
        let long = model.add(Type::new("long"));
        let id = model.add(Field::new("user_id", long).private());
        let methods = accessors(&mut model, &[id]).unwrap();
        assert_eq!(methods.len(), 2);

        let mut builder = Generator::builder();
        builder.install(&Java8).unwrap();
        let generator = builder.build();

        assert_eq!(
            generator.render_id(&model, methods[0]).unwrap(),
            "public long getUserId() {\n    return this.user_id;\n}"
        );
        assert_eq!(
            generator.render_id(&model, methods[1]).unwrap(),
            "public void setUserId(long user_id) {\n    this.user_id = user_id;\n}"
        );
    }

    #[test]
    fn test_shared_void_type() {
        let mut model = Model::new();
        let int = model.add(Type::new("int"));
        let x = model.add(Field::new("x", int));
        let y = model.add(Field::new("y", int));
        let before = model.len();

        accessors(&mut model, &[x, y]).unwrap();
        // 4 methods, 2 setter params, 1 void type
        assert_eq!(model.len(), before + 7);
    }

    #[test]
    fn test_rejects_non_field() {
        let mut model = Model::new();
        let pkg = model.add(Package::new("app"));
        let class = model.add_child(pkg, Class::new("Main"));

        assert!(matches!(
            accessors(&mut model, &[class]).unwrap_err(),
            Error::KindMismatch {
                found: NodeKind::Class,
                ..
            }
        ));
        assert!(matches!(
            accessors(&mut model, &[NodeId::new(99)]).unwrap_err(),
            Error::UnknownNode { .. }
        ));
    }
}
