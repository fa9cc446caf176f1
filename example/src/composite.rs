use pgparam::{Encode, Param, ParamArrays, Result, ToParam, encode, params};

#[derive(Clone, ToParam)]
struct UserId(i64);

enum Role {
    Admin,
    Member,
}

impl ToParam for Role {
    type Target = &'static str;

    fn to_param(&self) -> Self::Target {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

pub fn main() -> Result<()> {
    // INSERT INTO users(id, name, role, manager, age) VALUES($1, $2, $3, $4, $5)
    let row = (UserId(1), "Foo", Role::Admin, None::<UserId>, Some(30i16));
    let params = encode(&row)?;

    let arrays = ParamArrays::new(&params);
    assert_eq!(arrays.len(), 5);
    assert_eq!(arrays.formats(), &[1, 0, 0, 1, 1]);
    assert_eq!(arrays.lengths(), &[8, 0, 0, 8, 2]);
    tracing::info!(lengths = ?arrays.lengths(), formats = ?arrays.formats());

    let mut buf = Vec::new();
    pgparam::write_bind_params(&params, &mut buf);
    assert_eq!(buf.len(), params::bind_params_size(&params));
    tracing::info!(bytes = buf.len(), "bind parameters");

    let member = encode(Role::Member)?;
    assert_eq!(member.data(0), Some(&b"member\0"[..]));

    // nested tuple flatten into the same column sequence
    let flat = encode((1i32, 2i32, 3i32))?;
    let nested = encode((1i32, (), (2i32, (3i32,))))?;
    let columns = <<(i32, i32, i32) as Encode>::Param as Param>::COLUMNS;
    for i in 0..columns {
        assert_eq!(flat.data(i), nested.data(i));
    }

    Ok(())
}
