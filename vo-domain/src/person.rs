//! 人员（Person）实体
//!
//! 与 `Name` 等值对象相对：`Person` 以标识判等。
//! `Person` 是一个共享句柄，`clone()` 得到的是同一个人的另一个引用，
//! 通过任一句柄修改姓名，其余句柄都能观察到。
//!
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use vo_macros::entity_id;

use crate::entity::Entity;
use crate::name::Name;

/// 人员标识，进程内唯一
#[entity_id]
pub struct PersonId(u64);

static NEXT_PERSON_ID: AtomicU64 = AtomicU64::new(1);

impl PersonId {
    fn next() -> Self {
        Self::new(NEXT_PERSON_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct PersonState {
    id: PersonId,
    name: RefCell<Name>,
}

/// 人员实体句柄
#[derive(Clone)]
pub struct Person(Rc<PersonState>);

impl Person {
    pub fn new(name: Name) -> Self {
        let id = PersonId::next();
        tracing::trace!(person = %id, name = %name, "person created");
        Self(Rc::new(PersonState {
            id,
            name: RefCell::new(name),
        }))
    }

    /// 当前姓名的快照
    pub fn name(&self) -> Name {
        self.0.name.borrow().clone()
    }

    /// 替换姓名，对所有指向同一人员的句柄可见
    pub fn set_name(&self, name: Name) {
        let previous = self.0.name.replace(name);
        tracing::debug!(
            person = %self.0.id,
            from = %previous,
            to = %self.0.name.borrow(),
            "person renamed"
        );
    }

    /// 是否为同一个人员（引用同一性）
    ///
    /// # 示例
    ///
    /// ```
    /// use vo_domain::name::Name;
    /// use vo_domain::person::Person;
    ///
    /// let harry = Person::new(Name::new("Harry", "Percival").unwrap());
    /// let barry = harry.clone();
    /// barry.set_name(Name::new("Barry", "Percival").unwrap());
    ///
    /// assert!(harry.is(&barry) && barry.is(&harry));
    /// assert_eq!(harry.name(), Name::new("Barry", "Percival").unwrap());
    /// ```
    pub fn is(&self, other: &Person) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.0.id
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("id", &self.0.id)
            .field("name", &*self.0.name.borrow())
            .finish()
    }
}
