// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod repository_test;
mod search_api_test;
