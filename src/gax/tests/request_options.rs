// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rds_gax::options::RequestOptions;
use std::time::Duration;

#[test]
fn test_setall() {
    let mut options = RequestOptions::default();
    options.set_user_agent("myapp/4.5.6");
    assert_eq!(options.user_agent().as_deref(), Some("myapp/4.5.6"));
    assert_eq!(options.attempt_timeout(), &None);

    options.set_attempt_timeout(Duration::from_secs(123));
    options.set_user_agent("myapp/3.4.5");
    assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(123)));
    assert_eq!(options.user_agent().as_deref(), Some("myapp/3.4.5"));
}
