//! The roster shown on a first run, before anything has been saved.

use roster_core::{
  Result,
  address_book::AddressBook,
  cca::{Attendance, Cca, CcaInformation, SessionCount},
  field::{Address, CcaName, Email, Name, Phone, Role},
  person::Person,
};

pub fn sample_address_book() -> Result<AddressBook> {
  let choir = cca("Choir")?;
  let chess = cca("Chess Club")?;
  let football = cca("Football")?;

  let persons = vec![
    person(
      "Alex Yeoh",
      "87438807",
      "alexyeoh@example.com",
      "Blk 30 Geylang Street 29, #06-40",
      vec![record(&choir, "Member", 4, 10)?],
    )?,
    person(
      "Bernice Yu",
      "99272758",
      "berniceyu@example.com",
      "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
      vec![record(&choir, "President", 9, 10)?, record(&chess, "Member", 2, 6)?],
    )?,
    person(
      "Charlotte Oliveiro",
      "93210283",
      "charlotte@example.com",
      "Blk 11 Ang Mo Kio Street 74, #11-04",
      vec![],
    )?,
    person(
      "David Li",
      "91031282",
      "lidavid@example.com",
      "Blk 436 Serangoon Gardens Street 26, #16-43",
      vec![record(&football, "Captain", 7, 8)?],
    )?,
    person(
      "Irfan Ibrahim",
      "92492021",
      "irfan@example.com",
      "Blk 47 Tampines Street 20, #17-35",
      vec![record(&chess, "Treasurer", 5, 6)?],
    )?,
    person(
      "Roy Balakrishnan",
      "92624417",
      "royb@example.com",
      "Blk 45 Aljunied Street 85, #11-31",
      vec![],
    )?,
  ];

  AddressBook::with_data(persons, [choir, chess, football])
}

fn cca(name: &str) -> Result<Cca> { Ok(Cca::new(CcaName::new(name)?)) }

fn record(cca: &Cca, role: &str, attended: u32, total: u32) -> Result<CcaInformation> {
  Ok(CcaInformation::new(
    cca.clone(),
    Role::new(role)?,
    Attendance::new(SessionCount::from(attended), SessionCount::from(total)),
  ))
}

fn person(
  name: &str,
  phone: &str,
  email: &str,
  address: &str,
  records: Vec<CcaInformation>,
) -> Result<Person> {
  Ok(Person::new(
    Name::new(name)?,
    Phone::new(phone)?,
    Email::new(email)?,
    Address::new(address)?,
    records,
  ))
}
