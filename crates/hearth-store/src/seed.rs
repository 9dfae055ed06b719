//! Fixed demo seed: the data set the store starts from on first launch and
//! falls back to when the snapshot is unusable.

use chrono::{Duration, NaiveDate, Utc};

use hearth_shared::*;

use crate::store::StoreData;

fn user(
    id: &str,
    telegram_id: i64,
    username: &str,
    first_name: &str,
    last_name: &str,
    avatar_seed: &str,
    birthday: &str,
    show_birthday: bool,
) -> User {
    User {
        id: id.into(),
        telegram_id,
        username: Some(username.to_string()),
        first_name: first_name.to_string(),
        last_name: Some(last_name.to_string()),
        avatar_url: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={avatar_seed}"
        )),
        birthday: NaiveDate::parse_from_str(birthday, "%Y-%m-%d").ok(),
        show_birthday,
        created_at: Some(Utc::now()),
    }
}

fn users() -> Vec<User> {
    vec![
        user("1", 123456789, "ivan_ivanov", "Иван", "Иванов", "Ivan", "1990-05-15", true),
        user("2", 987654321, "maria_ivanova", "Мария", "Иванова", "Maria", "1992-08-22", true),
        user("3", 555555555, "petr_petrov", "Пётр", "Петров", "Petr", "1988-03-10", false),
        user("4", 777777777, "anna_sidorova", "Анна", "Сидорова", "Anna", "1995-12-01", true),
        user("5", 999999999, "alex_smirnov", "Александр", "Смирнов", "Alex", "1993-07-20", true),
    ]
}

fn member(id: &str, family_id: &str, user: &User, role: FamilyRole) -> FamilyMember {
    FamilyMember {
        id: id.into(),
        family_id: family_id.into(),
        user_id: user.id.clone(),
        role,
        joined_at: Utc::now(),
        user: Some(user.clone()),
    }
}

fn families(users: &[User]) -> Vec<FamilyGroup> {
    vec![
        FamilyGroup {
            id: "f1".into(),
            name: "Семья Ивановых".into(),
            created_by: "1".into(),
            created_at: Some(Utc::now()),
            members: vec![
                member("fm1", "f1", &users[0], FamilyRole::Admin),
                member("fm2", "f1", &users[1], FamilyRole::Member),
            ],
        },
        FamilyGroup {
            id: "f2".into(),
            name: "Родители".into(),
            created_by: "1".into(),
            created_at: Some(Utc::now()),
            members: vec![member("fm3", "f2", &users[0], FamilyRole::Admin)],
        },
    ]
}

fn friendship(id: &str, user_id: &str, friend_id: &str, days_ago: i64) -> Friendship {
    Friendship {
        id: id.into(),
        user_id: user_id.into(),
        friend_id: friend_id.into(),
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

fn friendships() -> Vec<Friendship> {
    // Ivan is friends with Petr, Anna and Alex; each edge exists both ways.
    vec![
        friendship("fs1", "1", "3", 30),
        friendship("fs2", "3", "1", 30),
        friendship("fs3", "1", "4", 14),
        friendship("fs4", "4", "1", 14),
        friendship("fs5", "1", "5", 7),
        friendship("fs6", "5", "1", 7),
    ]
}

fn friend_requests(users: &[User]) -> Vec<FriendRequest> {
    vec![FriendRequest {
        id: "fr1".into(),
        sender_id: "2".into(),
        receiver_id: "3".into(),
        status: RequestStatus::Pending,
        created_at: Utc::now(),
        sender: Some(users[1].clone()),
    }]
}

fn category(id: &str, name: &str, icon: &str, kind: TaskKind, order: u32) -> TaskCategory {
    TaskCategory {
        id: id.into(),
        name: name.to_string(),
        icon: icon.to_string(),
        kind,
        order,
    }
}

fn categories() -> Vec<TaskCategory> {
    use TaskKind::*;
    vec![
        category("c1", "Молочное", "Milk", Shopping, 1),
        category("c2", "Мясо/Рыба", "Beef", Shopping, 2),
        category("c3", "Бакалея", "Package", Shopping, 3),
        category("c4", "Овощи/Фрукты", "Apple", Shopping, 4),
        category("c5", "Напитки", "CupSoda", Shopping, 5),
        category("c6", "Хлеб/Выпечка", "Croissant", Shopping, 6),
        category("c7", "Маркетплейсы", "ShoppingBag", Shopping, 7),
        category("c8", "Аптека", "Pill", Shopping, 8),
        category("c9", "Бытовая химия", "SprayCan", Shopping, 9),
        category("c10", "Другое", "ShoppingCart", Shopping, 10),
        category("c11", "Уборка", "Home", Home, 1),
        category("c12", "Ремонт", "Hammer", Home, 2),
        category("c13", "Сад/Огород", "Trees", Home, 3),
        category("c14", "Готовка", "ChefHat", Home, 4),
        category("c15", "Другое", "House", Home, 5),
        category("c16", "Документы", "FileText", Other, 1),
        category("c17", "Звонки", "Phone", Other, 2),
        category("c18", "Встречи", "Users", Other, 3),
        category("c19", "Другое", "ListTodo", Other, 4),
    ]
}

struct TaskSeed<'a> {
    id: &'a str,
    created_by: &'a str,
    kind: TaskKind,
    category: &'a str,
    title: &'a str,
    description: Option<&'a str>,
    quantity: Option<f64>,
    unit: Option<&'a str>,
    assigned_to: &'a [&'a str],
    status: TaskStatus,
    completed_by: Option<&'a str>,
}

fn tasks() -> Vec<Task> {
    use TaskKind::*;
    use TaskStatus::*;
    let seeds = [
        TaskSeed { id: "t1", created_by: "1", kind: Shopping, category: "c1", title: "Молоко", description: Some("Желательно 3.2%"), quantity: Some(2.0), unit: Some("л"), assigned_to: &["1", "2"], status: Active, completed_by: None },
        TaskSeed { id: "t2", created_by: "2", kind: Shopping, category: "c2", title: "Куриная грудка", description: Some("Для салата Цезарь"), quantity: Some(1.0), unit: Some("кг"), assigned_to: &[], status: Active, completed_by: None },
        TaskSeed { id: "t3", created_by: "1", kind: Shopping, category: "c4", title: "Яблоки Голден", description: None, quantity: Some(5.0), unit: Some("шт"), assigned_to: &["1"], status: Completed, completed_by: Some("1") },
        TaskSeed { id: "t4", created_by: "1", kind: Home, category: "c11", title: "Помыть окна", description: Some("На кухне и в спальне"), quantity: None, unit: None, assigned_to: &["2"], status: Active, completed_by: None },
        TaskSeed { id: "t5", created_by: "2", kind: Shopping, category: "c5", title: "Сок апельсиновый", description: None, quantity: Some(1.0), unit: Some("л"), assigned_to: &[], status: Completed, completed_by: Some("2") },
        TaskSeed { id: "t6", created_by: "1", kind: Shopping, category: "c6", title: "Хлеб белый", description: None, quantity: Some(1.0), unit: Some("батон"), assigned_to: &[], status: Archived, completed_by: Some("1") },
        TaskSeed { id: "t7", created_by: "2", kind: Home, category: "c14", title: "Приготовить ужин", description: Some("Паста карбонара"), quantity: None, unit: None, assigned_to: &["2"], status: Active, completed_by: None },
        TaskSeed { id: "t8", created_by: "1", kind: Other, category: "c16", title: "Оплатить коммунальные", description: None, quantity: None, unit: None, assigned_to: &["1"], status: Active, completed_by: None },
    ];

    seeds
        .into_iter()
        .map(|s| Task {
            id: s.id.into(),
            family_id: "f1".into(),
            created_by: s.created_by.into(),
            kind: s.kind,
            category_id: Some(s.category.into()),
            title: s.title.to_string(),
            description: s.description.map(str::to_string),
            quantity: s.quantity,
            unit: s.unit.map(str::to_string),
            assigned_to: s.assigned_to.iter().map(|&u| u.into()).collect(),
            status: s.status,
            completed_at: s.completed_by.map(|_| Utc::now()),
            completed_by: s.completed_by.map(|u| u.into()),
            created_at: Utc::now() - Duration::days(1),
            updated_at: None,
        })
        .collect()
}

fn participant(id: &str, event_id: &str, user_id: &str, response: EventResponse) -> EventParticipant {
    EventParticipant {
        id: id.into(),
        event_id: event_id.into(),
        user_id: user_id.into(),
        response,
        updated_at: Utc::now(),
    }
}

fn events() -> Vec<Event> {
    use EventResponse::*;
    vec![
        Event {
            id: "e1".into(),
            created_by: "1".into(),
            title: "День рождения Маши".into(),
            description: Some("Отмечаем дома, приходите все! Будет торт и напитки.".into()),
            location: Some("Квартира Ивановых, ул. Ленина 15, кв. 42".into()),
            event_date: Utc::now() + Duration::days(7),
            image_url: None,
            invited_users: vec!["2".into(), "3".into(), "4".into(), "5".into()],
            participants: vec![
                participant("ep1", "e1", "2", Going),
                participant("ep2", "e1", "3", Pending),
                participant("ep3", "e1", "4", Going),
                participant("ep4", "e1", "5", NotGoing),
            ],
            created_at: Some(Utc::now()),
        },
        Event {
            id: "e2".into(),
            created_by: "3".into(),
            title: "Поход в кино".into(),
            description: Some("Новый фильм Marvel - \"Дэдпул и Росомаха\"".into()),
            location: Some("ТЦ Европа, кинотеатр Киномакс".into()),
            event_date: Utc::now() + Duration::days(3),
            image_url: None,
            invited_users: vec!["1".into()],
            participants: vec![participant("ep5", "e2", "1", Pending)],
            created_at: Some(Utc::now()),
        },
        Event {
            id: "e3".into(),
            created_by: "4".into(),
            title: "Пикник в парке".into(),
            description: Some("Выезд на природу, берём еду и напитки".into()),
            location: Some("Горький парк, главная аллея".into()),
            event_date: Utc::now() + Duration::days(14),
            image_url: None,
            invited_users: vec!["1".into(), "3".into()],
            participants: vec![
                participant("ep6", "e3", "1", Going),
                participant("ep7", "e3", "3", Pending),
            ],
            created_at: Some(Utc::now()),
        },
    ]
}

struct ItemSeed<'a> {
    id: &'a str,
    user_id: &'a str,
    title: &'a str,
    description: &'a str,
    link: Option<&'a str>,
    price: f64,
    booked_by: Option<&'a str>,
}

fn wishlist_items() -> Vec<WishlistItem> {
    let seeds = [
        ItemSeed { id: "w1", user_id: "1", title: "Наушники Sony WH-1000XM5", description: "Беспроводные наушники с активным шумоподавлением.", link: Some("https://market.yandex.ru/product--naushniki-sony-wh-1000xm5"), price: 35000.0, booked_by: None },
        ItemSeed { id: "w2", user_id: "1", title: "Книга \"Атомные привычки\"", description: "Джеймс Клир - Как приобретать полезные привычки", link: Some("https://www.ozon.ru/product/kniga-atomnye-privychki"), price: 800.0, booked_by: None },
        ItemSeed { id: "w3", user_id: "1", title: "Подписка на Яндекс.Плюс", description: "Годовая подписка на музыку, кино и такси", link: None, price: 2999.0, booked_by: Some("3") },
        ItemSeed { id: "w4", user_id: "2", title: "Подарочный сертификат Ozon", description: "Любая сумма, сам выберу что хочу", link: None, price: 5000.0, booked_by: Some("3") },
        ItemSeed { id: "w5", user_id: "2", title: "Набор контейнеров для хранения", description: "Стеклянные, герметичные", link: None, price: 2500.0, booked_by: None },
        ItemSeed { id: "w6", user_id: "3", title: "Футболка с принтом Star Wars", description: "Размер M, желательно чёрная", link: None, price: 1500.0, booked_by: None },
        ItemSeed { id: "w7", user_id: "4", title: "Абонемент в фитнес-клуб", description: "На 3 месяца", link: None, price: 9000.0, booked_by: None },
        ItemSeed { id: "w8", user_id: "5", title: "Умная колонка Яндекс.Станция", description: "С Алисой, для умного дома", link: None, price: 6000.0, booked_by: None },
    ];

    seeds
        .into_iter()
        .map(|s| WishlistItem {
            id: s.id.into(),
            user_id: s.user_id.into(),
            title: s.title.to_string(),
            description: Some(s.description.to_string()),
            link: s.link.map(str::to_string),
            price: Some(s.price),
            image_url: None,
            is_booked: s.booked_by.is_some(),
            booked_by: s.booked_by.map(|u| u.into()),
            booked_at: s.booked_by.map(|_| Utc::now()),
            created_at: Some(Utc::now()),
        })
        .collect()
}

pub(crate) fn store_data() -> StoreData {
    let users = users();
    let families = families(&users);
    let selected_family_id = families.first().map(|f| f.id.clone());
    StoreData {
        current_user: users[0].clone(),
        friend_requests: friend_requests(&users),
        users,
        families,
        friendships: friendships(),
        tasks: tasks(),
        categories: categories(),
        events: events(),
        wishlist_items: wishlist_items(),
        selected_family_id,
    }
}
