use strong_type::StrongType;

/// A row of the alignment, identifying one structure.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct StructureRow(usize);

/// An index into one structure's residue array.
#[derive(StrongType)]
#[strong_type(conversion, addable)]
pub struct ResidueIndex(usize);

/// A block's position in the alignment's block list.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct BlockIndex(usize);

/// A column local to one block.
#[derive(StrongType)]
#[strong_type(conversion, addable)]
pub struct BlockColumn(usize);

macro_rules! index_type_ops {
    ($name:ty) => {
        impl std::ops::Add<usize> for $name {
            type Output = Self;

            fn add(self, other: usize) -> Self::Output {
                Self(self.0 + other)
            }
        }

        impl std::ops::AddAssign<usize> for $name {
            fn add_assign(&mut self, other: usize) {
                self.0 += other
            }
        }

        impl<'a> From<&'a $name> for usize {
            fn from(value: &'a $name) -> Self {
                value.0
            }
        }
    };
}

index_type_ops!(ResidueIndex);
index_type_ops!(BlockColumn);
